//! 解封装器注册表.
//!
//! 管理已注册的解封装器, 实现宿主侧的选择循环:
//! 自动探测按注册顺序逐个尝试, 强制选择按名称直接创建.

use log::debug;

use crate::demuxer::{Demuxer, DemuxCheck, OpenContext};
use crate::error::{TextsubError, TextsubResult};
use crate::io::IoContext;
use crate::options::TextsubOptions;
use crate::probe::ContentProbe;

/// 解封装器工厂函数类型
pub type DemuxerFactory = fn() -> TextsubResult<Box<dyn Demuxer>>;

/// 注册条目
struct DemuxerEntry {
    /// 解封装器名称
    name: String,
    /// 工厂函数
    factory: DemuxerFactory,
}

/// 解封装器注册表
///
/// 条目保持注册顺序: 自动探测时顺序即优先级.
pub struct FormatRegistry {
    demuxers: Vec<DemuxerEntry>,
}

impl FormatRegistry {
    /// 创建空的注册表
    pub fn new() -> Self {
        Self {
            demuxers: Vec::new(),
        }
    }

    /// 注册一个解封装器
    pub fn register_demuxer(&mut self, name: impl Into<String>, factory: DemuxerFactory) {
        self.demuxers.push(DemuxerEntry {
            name: name.into(),
            factory,
        });
    }

    /// 按名称创建解封装器实例
    pub fn create_demuxer(&self, name: &str) -> TextsubResult<Box<dyn Demuxer>> {
        let entry = self
            .demuxers
            .iter()
            .find(|e| e.name == name)
            .ok_or_else(|| TextsubError::DemuxerNotFound(name.to_string()))?;
        (entry.factory)()
    }

    /// 获取所有已注册的解封装器名称
    pub fn list_demuxers(&self) -> Vec<&str> {
        self.demuxers.iter().map(|e| e.name.as_str()).collect()
    }

    /// 自动探测并打开输入
    ///
    /// 按注册顺序逐个尝试解封装器; 某个解封装器因无法识别格式而
    /// 拒绝资源时继续尝试下一个 (格式探测只预读, 不消耗数据,
    /// 资源对后续尝试保持完好). 读取失败等其他错误直接向上传播,
    /// 换一个解封装器也无济于事.
    pub fn open_input(
        &self,
        io: &mut IoContext,
        filename: &str,
        options: TextsubOptions,
        probe: &dyn ContentProbe,
    ) -> TextsubResult<Box<dyn Demuxer>> {
        for entry in &self.demuxers {
            let mut demuxer = (entry.factory)()?;
            let ctx = OpenContext {
                filename,
                check: DemuxCheck::Auto,
                options,
                probe,
            };
            match demuxer.open(io, &ctx) {
                Ok(()) => return Ok(demuxer),
                Err(TextsubError::FormatUnresolved(_)) => {
                    debug!("registry: {} 拒绝了 {}", entry.name, filename);
                }
                Err(e) => return Err(e),
            }
        }
        Err(TextsubError::FormatUnresolved(filename.to_string()))
    }

    /// 强制以指定解封装器打开输入
    ///
    /// 绕过自动探测: 即使格式无法识别, 解封装器也会降级打开
    /// (注册的流不带编解码器标识). 读取失败仍然致命.
    pub fn open_forced(
        &self,
        name: &str,
        io: &mut IoContext,
        filename: &str,
        options: TextsubOptions,
        probe: &dyn ContentProbe,
    ) -> TextsubResult<Box<dyn Demuxer>> {
        let mut demuxer = self.create_demuxer(name)?;
        let ctx = OpenContext {
            filename,
            check: DemuxCheck::Forced,
            options,
            probe,
        };
        demuxer.open(io, &ctx)?;
        Ok(demuxer)
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::new()
    }
}
