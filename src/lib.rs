//! # textsub-format
//!
//! 纯 Rust 文本字幕解封装库.
//!
//! 识别整文件文本字幕资源的格式 (WebVTT / srv3), 把全部内容作为
//! 单个数据包暴露给下游解码器. 格式识别优先看文件扩展名, 未命中
//! 时对资源开头的有限字节做内容探测.
//!
//! # 快速开始
//!
//! ```rust
//! use textsub_format::io::{IoContext, MemoryBackend};
//! use textsub_format::probe::TextProbe;
//! use textsub_format::options::TextsubOptions;
//!
//! let registry = textsub_format::default_format_registry();
//!
//! let data = b"WEBVTT\n\n00:00.000 --> 00:01.000\nhello\n".to_vec();
//! let mut io = IoContext::new(Box::new(MemoryBackend::from_data(data)));
//!
//! let mut demuxer = registry
//!     .open_input(&mut io, "clip.vtt", TextsubOptions::default(), &TextProbe)
//!     .unwrap();
//! assert_eq!(demuxer.streams()[0].codec, Some("textsub/vtt"));
//!
//! // 整个资源作为一个数据包发出
//! let packet = demuxer.read_packet(&mut io).unwrap().unwrap();
//! assert!(packet.duration.is_infinite());
//! ```

pub mod demuxer;
pub mod demuxers;
pub mod error;
pub mod format;
pub mod io;
pub mod options;
pub mod packet;
pub mod probe;
pub mod registry;
pub mod stream;

// 重导出常用类型
pub use demuxer::{DemuxCheck, Demuxer, OpenContext, SeekFlags};
pub use error::{TextsubError, TextsubResult};
pub use format::FormatInfo;
pub use io::IoContext;
pub use options::TextsubOptions;
pub use packet::Packet;
pub use probe::{ContentProbe, ProbeTag, TextProbe};
pub use registry::FormatRegistry;
pub use stream::Stream;

/// 获取版本号
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// 创建已注册所有内置解封装器的注册表
pub fn default_format_registry() -> FormatRegistry {
    let mut registry = FormatRegistry::new();
    demuxers::register_all_demuxers(&mut registry);
    registry
}
