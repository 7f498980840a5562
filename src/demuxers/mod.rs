//! 解封装器实现模块.

pub mod textsub;

use crate::registry::FormatRegistry;

/// 注册所有内置解封装器
pub fn register_all_demuxers(registry: &mut FormatRegistry) {
    registry.register_demuxer("textsub", textsub::TextsubDemuxer::create);
}
