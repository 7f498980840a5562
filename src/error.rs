//! 统一错误类型定义.
//!
//! 整个 crate 共用的错误类型, 支持跨模块传播.

use thiserror::Error;

/// textsub-format 统一错误类型
#[derive(Debug, Error)]
pub enum TextsubError {
    /// 无效参数 (配置校验失败等)
    #[error("无效参数: {0}")]
    InvalidArgument(String),

    /// 无法识别字幕格式 (扩展名与内容探测均未命中)
    #[error("无法识别字幕格式: {0}")]
    FormatUnresolved(String),

    /// 资源超出整体读取上限
    #[error("资源过大: {size} 字节, 上限 {cap} 字节")]
    ResourceTooLarge {
        /// 已读取/声明的字节数
        size: u64,
        /// 读取上限
        cap: u64,
    },

    /// I/O 错误
    #[error("I/O 错误: {0}")]
    Io(#[from] std::io::Error),

    /// 传输层已关闭, 不允许继续读取
    #[error("传输层已关闭")]
    TransportClosed,

    /// 已到达流末尾
    #[error("已到达流末尾")]
    Eof,

    /// 未找到指定的解封装器
    #[error("未找到解封装器: {0}")]
    DemuxerNotFound(String),
}

/// textsub-format 统一 Result 类型
pub type TextsubResult<T> = Result<T, TextsubError>;
