//! # Localization
//!
//! Vietnamese and English strings for the screens, plus the history row
//! formatter.
//!
//! Templates use `{name}` placeholders filled by [`apply_template`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Currency;
use crate::types::{Language, Transaction, TransactionKind};

/// Every translatable string the screens show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum MessageKey {
    // Settings screen
    SettingsTitle,
    AppLanguage,
    ChangeLanguageHelper,
    CurrencyLabel,
    CurrencyHelper,
    CurrencyUsd,
    CurrencyVnd,
    ResetData,
    ResetDataTitle,
    ResetDataBody,
    ResetDataHelper,
    ResetDataAction,
    Cancel,

    // History screen
    HistoryTitle,
    HistoryEmpty,
    HistorySale,
    HistoryRestock,
    HistoryAdjustment,
    HistoryUndoPrefix,

    // Add / adjust screens
    ProductName,
    StartingQuantity,
    PricePerUnit,
    CostPerUnit,
    EnterQuantity,
    EnterValidQuantity,
    QuantityAtLeastOne,
    AddStockFor,
    RecordLossFor,
    MarkAsWaste,
    DeleteProduct,
    DeleteProductBody,
}

impl MessageKey {
    /// All keys, for completeness checks.
    pub const ALL: [MessageKey; 31] = [
        MessageKey::SettingsTitle,
        MessageKey::AppLanguage,
        MessageKey::ChangeLanguageHelper,
        MessageKey::CurrencyLabel,
        MessageKey::CurrencyHelper,
        MessageKey::CurrencyUsd,
        MessageKey::CurrencyVnd,
        MessageKey::ResetData,
        MessageKey::ResetDataTitle,
        MessageKey::ResetDataBody,
        MessageKey::ResetDataHelper,
        MessageKey::ResetDataAction,
        MessageKey::Cancel,
        MessageKey::HistoryTitle,
        MessageKey::HistoryEmpty,
        MessageKey::HistorySale,
        MessageKey::HistoryRestock,
        MessageKey::HistoryAdjustment,
        MessageKey::HistoryUndoPrefix,
        MessageKey::ProductName,
        MessageKey::StartingQuantity,
        MessageKey::PricePerUnit,
        MessageKey::CostPerUnit,
        MessageKey::EnterQuantity,
        MessageKey::EnterValidQuantity,
        MessageKey::QuantityAtLeastOne,
        MessageKey::AddStockFor,
        MessageKey::RecordLossFor,
        MessageKey::MarkAsWaste,
        MessageKey::DeleteProduct,
        MessageKey::DeleteProductBody,
    ];
}

/// Looks up the string for a key in the given language.
pub fn translate(language: Language, key: MessageKey) -> &'static str {
    match language {
        Language::En => english(key),
        Language::Vi => vietnamese(key),
    }
}

fn english(key: MessageKey) -> &'static str {
    use MessageKey::*;

    match key {
        SettingsTitle => "Settings",
        AppLanguage => "App language",
        ChangeLanguageHelper => "Choose the language used for labels and history.",
        CurrencyLabel => "Currency",
        CurrencyHelper => "Only changes how amounts are displayed.",
        CurrencyUsd => "US Dollar (USD)",
        CurrencyVnd => "Vietnamese Dong (VND)",
        ResetData => "Reset data",
        ResetDataTitle => "Reset all data?",
        ResetDataBody => "This removes every product and the full transaction history.",
        ResetDataHelper => "Start over with an empty inventory.",
        ResetDataAction => "Reset",
        Cancel => "Cancel",
        HistoryTitle => "History",
        HistoryEmpty => "No transactions yet.\nSell or restock a product to see it here.",
        HistorySale => "Sold {quantity} × {product} for {amount}",
        HistoryRestock => "Restocked {quantity} × {product} for {amount}",
        HistoryAdjustment => "Adjusted {product} by {quantity}",
        HistoryUndoPrefix => "Undo:",
        ProductName => "Product name",
        StartingQuantity => "Starting quantity",
        PricePerUnit => "Price per unit",
        CostPerUnit => "Cost per unit",
        EnterQuantity => "Enter quantity",
        EnterValidQuantity => "Enter a valid quantity",
        QuantityAtLeastOne => "Quantity must be at least 1.",
        AddStockFor => "Add stock for {product}",
        RecordLossFor => "Record loss for {product}",
        MarkAsWaste => "Mark as waste?",
        DeleteProduct => "Delete product",
        DeleteProductBody => "This will permanently remove this product and its history.",
    }
}

fn vietnamese(key: MessageKey) -> &'static str {
    use MessageKey::*;

    match key {
        SettingsTitle => "Cài đặt",
        AppLanguage => "Ngôn ngữ ứng dụng",
        ChangeLanguageHelper => "Chọn ngôn ngữ cho nhãn và lịch sử.",
        CurrencyLabel => "Tiền tệ",
        CurrencyHelper => "Chỉ thay đổi cách hiển thị số tiền.",
        CurrencyUsd => "Đô la Mỹ (USD)",
        CurrencyVnd => "Việt Nam Đồng (VND)",
        ResetData => "Xóa dữ liệu",
        ResetDataTitle => "Xóa toàn bộ dữ liệu?",
        ResetDataBody => "Thao tác này xóa mọi sản phẩm và toàn bộ lịch sử giao dịch.",
        ResetDataHelper => "Bắt đầu lại với kho hàng trống.",
        ResetDataAction => "Xóa",
        Cancel => "Hủy",
        HistoryTitle => "Lịch sử",
        HistoryEmpty => "Chưa có giao dịch.\nBán hoặc nhập hàng để xem tại đây.",
        HistorySale => "Đã bán {quantity} × {product} với giá {amount}",
        HistoryRestock => "Đã nhập {quantity} × {product} với giá {amount}",
        HistoryAdjustment => "Đã điều chỉnh {product}: {quantity}",
        HistoryUndoPrefix => "Hoàn tác:",
        ProductName => "Tên sản phẩm",
        StartingQuantity => "Số lượng ban đầu",
        PricePerUnit => "Giá bán mỗi đơn vị",
        CostPerUnit => "Giá vốn mỗi đơn vị",
        EnterQuantity => "Nhập số lượng",
        EnterValidQuantity => "Nhập số lượng hợp lệ",
        QuantityAtLeastOne => "Số lượng phải ít nhất là 1.",
        AddStockFor => "Nhập thêm hàng cho {product}",
        RecordLossFor => "Ghi nhận hao hụt cho {product}",
        MarkAsWaste => "Đánh dấu là hao hụt?",
        DeleteProduct => "Xóa sản phẩm",
        DeleteProductBody => "Sản phẩm này và lịch sử của nó sẽ bị xóa vĩnh viễn.",
    }
}

/// Replaces each `{key}` in `template` with its value.
///
/// ```rust
/// use savn_core::i18n::apply_template;
///
/// let text = apply_template("Sold {quantity} × {product}", &[("quantity", "2"), ("product", "Tea")]);
/// assert_eq!(text, "Sold 2 × Tea");
/// ```
pub fn apply_template(template: &str, pairs: &[(&str, &str)]) -> String {
    pairs.iter().fold(template.to_string(), |acc, (key, value)| {
        acc.replace(&format!("{{{}}}", key), value)
    })
}

/// Builds the history row text for one transaction.
///
/// Sales and restocks show units and the amount; adjustments show the signed
/// change. Reversals get the localized "Undo:" prefix.
pub fn describe_transaction(language: Language, currency: Currency, tx: &Transaction) -> String {
    let (key, quantity) = match tx.kind {
        TransactionKind::Sale => (MessageKey::HistorySale, tx.units().to_string()),
        TransactionKind::Restock => (MessageKey::HistoryRestock, tx.units().to_string()),
        TransactionKind::Adjustment => (MessageKey::HistoryAdjustment, format!("{:+}", tx.quantity_delta)),
    };

    let amount = currency.format(tx.amount().abs());
    let row = apply_template(
        translate(language, key),
        &[
            ("quantity", quantity.as_str()),
            ("product", tx.product_name.as_str()),
            ("amount", amount.as_str()),
        ],
    );

    if tx.is_reversal() {
        format!("{} {}", translate(language, MessageKey::HistoryUndoPrefix), row)
    } else {
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sale(units: i64, cents: i64) -> Transaction {
        Transaction {
            id: "t1".to_string(),
            kind: TransactionKind::Sale,
            product_id: "p1".to_string(),
            product_name: "Widget".to_string(),
            quantity_delta: -units,
            amount_cents: cents,
            reverses: None,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_every_key_translated() {
        for key in MessageKey::ALL {
            assert!(!translate(Language::En, key).is_empty());
            assert!(!translate(Language::Vi, key).is_empty());
        }
    }

    #[test]
    fn test_apply_template_leaves_unknown_placeholders() {
        let text = apply_template("{a} and {b}", &[("a", "x")]);
        assert_eq!(text, "x and {b}");
    }

    #[test]
    fn test_describe_sale() {
        let tx = sale(2, 1000);
        assert_eq!(
            describe_transaction(Language::En, Currency::Usd, &tx),
            "Sold 2 × Widget for $10.00"
        );
        assert_eq!(
            describe_transaction(Language::Vi, Currency::Vnd, &tx),
            "Đã bán 2 × Widget với giá 10 ₫"
        );
    }

    #[test]
    fn test_describe_reversal_and_adjustment() {
        let mut tx = sale(1, 500);
        tx.quantity_delta = 1;
        tx.amount_cents = -500;
        tx.reverses = Some("t0".to_string());
        assert_eq!(
            describe_transaction(Language::En, Currency::Usd, &tx),
            "Undo: Sold 1 × Widget for $5.00"
        );

        let adjustment = Transaction {
            kind: TransactionKind::Adjustment,
            quantity_delta: -1,
            amount_cents: 0,
            ..sale(1, 0)
        };
        assert_eq!(
            describe_transaction(Language::En, Currency::Usd, &adjustment),
            "Adjusted Widget by -1"
        );
    }
}
