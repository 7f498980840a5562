//! 数据包 (Packet).
//!
//! 从资源中读出的一个字幕数据单元, 交给下游解码器整体解析.

use bytes::Bytes;

/// 字幕数据包
///
/// 文本字幕资源不做分段: 整个文件作为一个数据包发出,
/// 时长为正无穷, 覆盖整条呈现时间轴.
#[derive(Debug, Clone)]
pub struct Packet {
    /// 载荷数据
    pub data: Bytes,
    /// 显示时间戳 (秒)
    pub pts: f64,
    /// 时长 (秒), 整文件字幕为 `f64::INFINITY`
    pub duration: f64,
    /// 所属流的索引
    pub stream_index: usize,
}

impl Packet {
    /// 从数据创建数据包 (pts=0, 时长 0, 流索引 0)
    pub fn from_data(data: impl Into<Bytes>) -> Self {
        Self {
            data: data.into(),
            pts: 0.0,
            duration: 0.0,
            stream_index: 0,
        }
    }

    /// 数据大小 (字节)
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// 是否为空包
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
