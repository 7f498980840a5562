//! 解封装器 (Demuxer) trait 定义.
//!
//! 定义宿主控制循环与具体解封装器之间的契约.
//!
//! 使用流程:
//! 1. 调用 `open()` 识别格式并完成资源装载
//! 2. 调用 `streams()` 获取注册的流信息
//! 3. 循环调用 `read_packet()` 读取数据包, 直到返回 `Ok(None)`
//! 4. 宿主重新选中轨道时调用 `switched_tracks()`
//!
//! 所有入口都由单个控制循环串行调用, 实现无须加锁.

use crate::error::TextsubResult;
use crate::io::IoContext;
use crate::options::TextsubOptions;
use crate::packet::Packet;
use crate::probe::ContentProbe;
use crate::stream::Stream;

/// 打开模式
///
/// 决定格式识别失败时 `open` 的行为.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemuxCheck {
    /// 自动探测: 格式无法识别时打开失败, 宿主可以尝试其他解封装器
    Auto,
    /// 强制选择: 宿主明确指定了此解封装器, 格式无法识别时仍然打开,
    /// 注册的流不带编解码器标识
    Forced,
}

/// 打开参数
pub struct OpenContext<'a> {
    /// 资源文件名 (用于扩展名匹配)
    pub filename: &'a str,
    /// 打开模式
    pub check: DemuxCheck,
    /// 配置项
    pub options: TextsubOptions,
    /// 内容分类器
    pub probe: &'a dyn ContentProbe,
}

/// Seek 标志
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeekFlags {
    /// 向后 seek
    pub backward: bool,
    /// 寻找任意位置 (不仅是关键点)
    pub any: bool,
}

impl Default for SeekFlags {
    fn default() -> Self {
        Self {
            backward: true,
            any: false,
        }
    }
}

/// 解封装器 trait
pub trait Demuxer: Send {
    /// 获取解封装器名称
    fn name(&self) -> &str;

    /// 打开资源: 识别格式, 装载内容, 注册流
    ///
    /// 成功后资源的传输层可能已被关闭 (内容已全部装载时).
    fn open(&mut self, io: &mut IoContext, ctx: &OpenContext) -> TextsubResult<()>;

    /// 获取已注册的流信息
    fn streams(&self) -> &[Stream];

    /// 读取下一个数据包
    ///
    /// # 返回
    /// - `Ok(Some(packet))`: 成功读取一个数据包
    /// - `Ok(None)`: 没有更多数据
    fn read_packet(&mut self, io: &mut IoContext) -> TextsubResult<Option<Packet>>;

    /// 定位到指定时间点 (秒)
    fn seek(&mut self, io: &mut IoContext, pts: f64, flags: SeekFlags) -> TextsubResult<()>;

    /// 宿主 (重新) 选中了本解封装器的轨道
    ///
    /// 解封装器据此重置内部状态, 以便重新发出数据.
    fn switched_tracks(&mut self);

    /// 是否可 seek
    fn seekable(&self) -> bool {
        false
    }

    /// 资源是否已在打开时被完整读取
    fn fully_read(&self) -> bool {
        false
    }
}
