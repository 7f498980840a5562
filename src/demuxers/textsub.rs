//! 文本字幕解封装器.
//!
//! 识别整文件文本字幕资源 (WebVTT / srv3), 把全部内容作为单个
//! 数据包交给下游解码器. 字幕文件体积小且由解码器整体解析,
//! 按传输层的原生粒度切分没有意义, 因此整个文件就是一个时长
//! 为正无穷的数据单元.
//!
//! 状态机: 打开后处于待发 (Pending) 状态, 第一次 `read_packet`
//! 发出唯一的数据包并进入耗尽 (Exhausted) 状态; 宿主重新选中
//! 轨道时 (`switched_tracks`) 回到待发状态, 同一份内容可以再次
//! 发出, 可重复任意多次.

use bytes::Bytes;
use log::debug;

use crate::demuxer::{Demuxer, DemuxCheck, OpenContext, SeekFlags};
use crate::error::{TextsubError, TextsubResult};
use crate::format;
use crate::io::IoContext;
use crate::packet::Packet;
use crate::stream::Stream;

/// 整体读取字幕资源的上限 (64 MiB)
pub const MAX_SUB_READ_SIZE: u64 = 64 * 1024 * 1024;

/// 单发缓冲区状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BufferState {
    /// 内容待发
    Pending,
    /// 内容已发出, 等待重置
    Exhausted,
}

/// 单发缓冲区
///
/// 持有装载完成的全部资源内容. 内容在装载时写入一次, 此后只读;
/// 每个装载/重置周期内恰好发出一次.
struct SingleShotBuffer {
    /// 资源的全部内容
    content: Bytes,
    /// 发出状态
    state: BufferState,
}

impl SingleShotBuffer {
    /// 整体装载资源内容, 超过 `cap` 字节时失败
    ///
    /// 失败时不保留任何缓冲区.
    fn load(io: &mut IoContext, cap: u64) -> TextsubResult<Self> {
        let content = io.read_to_end(cap)?;
        Ok(Self {
            content: Bytes::from(content),
            state: BufferState::Pending,
        })
    }

    /// 取出内容: 待发状态下返回全部内容并进入耗尽状态,
    /// 其后一直返回 None 直到 `reset`
    fn take(&mut self) -> Option<Bytes> {
        match self.state {
            BufferState::Pending => {
                self.state = BufferState::Exhausted;
                Some(self.content.clone())
            }
            BufferState::Exhausted => None,
        }
    }

    /// 清除耗尽状态, 允许同一份内容再发出一次. 未耗尽时调用无害.
    fn reset(&mut self) {
        self.state = BufferState::Pending;
    }
}

/// 文本字幕解封装器
pub struct TextsubDemuxer {
    /// 流信息 (打开成功后恰好一条)
    streams: Vec<Stream>,
    /// 单发缓冲区, 打开成功后存在
    buffer: Option<SingleShotBuffer>,
}

impl TextsubDemuxer {
    /// 创建文本字幕解封装器实例 (工厂函数)
    pub fn create() -> TextsubResult<Box<dyn Demuxer>> {
        Ok(Box::new(Self {
            streams: Vec::new(),
            buffer: None,
        }))
    }
}

impl Demuxer for TextsubDemuxer {
    fn name(&self) -> &str {
        "textsub"
    }

    fn open(&mut self, io: &mut IoContext, ctx: &OpenContext) -> TextsubResult<()> {
        ctx.options.validate()?;

        let info = format::resolve(ctx.filename, io, ctx.probe, ctx.options.probe_size)?;

        if info.is_none() && ctx.check != DemuxCheck::Forced {
            return Err(TextsubError::FormatUnresolved(ctx.filename.to_string()));
        }

        // 读取失败在任何模式下都是致命的, 且不保留部分状态
        let buffer = SingleShotBuffer::load(io, MAX_SUB_READ_SIZE)?;
        debug!(
            "textsub: 装载 {} 字节, 编解码器 {:?}",
            buffer.content.len(),
            info.map(|i| i.codec)
        );
        self.buffer = Some(buffer);

        self.streams = vec![Stream {
            index: 0,
            codec: info.map(|i| i.codec),
            codec_desc: info.map(|i| i.codec_desc),
        }];

        // 内容已全部装载, 传输层不再需要
        io.close();
        Ok(())
    }

    fn streams(&self) -> &[Stream] {
        &self.streams
    }

    fn read_packet(&mut self, _io: &mut IoContext) -> TextsubResult<Option<Packet>> {
        let Some(buffer) = self.buffer.as_mut() else {
            return Ok(None);
        };
        let Some(data) = buffer.take() else {
            return Ok(None);
        };

        let mut pkt = Packet::from_data(data);
        pkt.stream_index = 0;
        pkt.pts = 0.0;
        pkt.duration = f64::INFINITY;
        Ok(Some(pkt))
    }

    fn seek(&mut self, _io: &mut IoContext, _pts: f64, _flags: SeekFlags) -> TextsubResult<()> {
        // 只发出一个数据包, 没有可定位的内部时间轴
        Ok(())
    }

    fn switched_tracks(&mut self) {
        if let Some(buffer) = self.buffer.as_mut() {
            buffer.reset();
        }
    }

    fn seekable(&self) -> bool {
        true
    }

    fn fully_read(&self) -> bool {
        true
    }
}
