use thiserror::Error;

/// Failures while decoding an uploaded workbook. All of these abort the
/// current mapping step and are reported to the user verbatim; none are
/// retried automatically.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("不支援的檔案格式「{extension}」，僅支援 .xls / .xlsx")]
    UnsupportedFormat { extension: String },

    #[error("讀取 .xls 檔失敗：{0}")]
    Xls(#[from] calamine::XlsError),

    #[error("讀取 .xlsx 檔失敗：{0}")]
    Xlsx(#[from] calamine::XlsxError),

    #[error("找不到工作表「{0}」")]
    SheetNotFound(String),

    #[error("跳過列數 {skip_rows} 超出工作表「{sheet}」的 {total_rows} 列")]
    SkipBeyondEnd {
        sheet: String,
        skip_rows: usize,
        total_rows: usize,
    },
}
