use thiserror::Error;

/// Failures while binding raw columns to canonical fields. Reported to
/// the user as-is; the fix is always to re-bind (or adjust skip-rows)
/// and confirm again.
#[derive(Debug, Error)]
pub enum BindingError {
    #[error("找不到欄位「{0}」，請重新對應")]
    UnknownColumn(String),

    #[error("群組欄第 {row} 列不是整數：「{value}」")]
    InvalidGroup { row: usize, value: String },

    #[error("對應後沒有可用的資料列，請檢查欄位對應或跳過列數")]
    NoUsableRows,
}
