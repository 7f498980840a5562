//! 流信息定义.

/// 字幕流信息
///
/// 描述一条注册给宿主的字幕轨道. 每次成功打开恰好注册一条,
/// 注册后不再修改.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stream {
    /// 流索引 (从 0 开始)
    pub index: usize,
    /// 编解码器标识; 强制选择模式下格式未识别时为 None
    pub codec: Option<&'static str>,
    /// 人类可读的格式名称
    pub codec_desc: Option<&'static str>,
}
