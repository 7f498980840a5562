//! I/O 抽象层.
//!
//! 为解封装器提供统一的只读字节来源接口, 支持文件与内存缓冲区后端.
//! 核心能力是非消耗性预读 (`peek`) 与带上限的整体读取 (`read_to_end`):
//! 字幕资源以整个文件为单位交给下游解码器, 不需要随机访问.

use std::io::Read;

use crate::error::{TextsubError, TextsubResult};

/// I/O 后端 trait
///
/// 实现此 trait 以支持不同的字节来源 (文件、内存等). 只读.
pub trait IoBackend: Send {
    /// 读取数据到缓冲区, 返回实际读取的字节数, 0 表示 EOF
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize>;
    /// 获取总大小 (如果可知)
    fn size(&self) -> Option<u64>;
}

/// 初始预读缓冲区大小 (4 KB)
const INITIAL_BUFFER_SIZE: usize = 4 * 1024;

/// 整体读取时的分块大小 (64 KB)
const READ_CHUNK_SIZE: usize = 64 * 1024;

/// I/O 上下文
///
/// 封装底层 I/O 后端, 在其上维护一个预读缓冲区:
/// `peek` 只填充缓冲区而不推进逻辑读取位置, 后续的消耗性读取
/// 先吃掉缓冲区中的数据再继续从后端读取.
pub struct IoContext {
    /// 内部 I/O 后端, `close()` 之后为 None
    inner: Option<Box<dyn IoBackend>>,
    /// 预读缓冲区
    buffer: Vec<u8>,
    /// 缓冲区中的有效数据长度
    buf_len: usize,
    /// 缓冲区当前消耗位置
    buf_pos: usize,
}

impl IoContext {
    /// 从 I/O 后端创建上下文
    pub fn new(backend: Box<dyn IoBackend>) -> Self {
        Self {
            inner: Some(backend),
            buffer: vec![0u8; INITIAL_BUFFER_SIZE],
            buf_len: 0,
            buf_pos: 0,
        }
    }

    /// 从文件路径打开 (只读)
    pub fn open_read(path: &str) -> TextsubResult<Self> {
        let file = std::fs::File::open(path)?;
        Ok(Self::new(Box::new(FileBackend::new(file))))
    }

    /// 资源总大小 (如果后端可知)
    pub fn size(&self) -> Option<u64> {
        self.inner.as_ref().and_then(|b| b.size())
    }

    /// 传输层是否已关闭
    pub fn is_closed(&self) -> bool {
        self.inner.is_none()
    }

    /// 关闭传输层, 丢弃后端与缓冲区
    ///
    /// 关闭后所有读取方法返回 [`TextsubError::TransportClosed`].
    /// 重复调用无害.
    pub fn close(&mut self) {
        self.inner = None;
        self.buffer = Vec::new();
        self.buf_len = 0;
        self.buf_pos = 0;
    }

    fn backend_mut(&mut self) -> TextsubResult<&mut Box<dyn IoBackend>> {
        self.inner.as_mut().ok_or(TextsubError::TransportClosed)
    }

    /// 预读最多 `max` 字节, 不推进读取位置
    ///
    /// 返回的切片长度可能小于 `max` (资源本身不足时).
    /// 重复调用返回相同的数据前缀.
    pub fn peek(&mut self, max: usize) -> TextsubResult<&[u8]> {
        if self.inner.is_none() {
            return Err(TextsubError::TransportClosed);
        }

        // 把未消耗的数据挪到缓冲区开头, 便于原地扩展
        if self.buf_pos > 0 {
            self.buffer.copy_within(self.buf_pos..self.buf_len, 0);
            self.buf_len -= self.buf_pos;
            self.buf_pos = 0;
        }
        if self.buffer.len() < max {
            self.buffer.resize(max, 0);
        }

        while self.buf_len < max {
            let n = {
                let backend = self.inner.as_mut().ok_or(TextsubError::TransportClosed)?;
                backend
                    .read(&mut self.buffer[self.buf_len..max])
                    .map_err(TextsubError::Io)?
            };
            if n == 0 {
                break;
            }
            self.buf_len += n;
        }

        Ok(&self.buffer[..self.buf_len.min(max)])
    }

    /// 读取资源的全部剩余内容, 总量超过 `cap` 字节时失败
    ///
    /// 失败时调用方不会拿到任何已读数据. 恰好等于 `cap` 的资源读取成功.
    pub fn read_to_end(&mut self, cap: u64) -> TextsubResult<Vec<u8>> {
        if self.inner.is_none() {
            return Err(TextsubError::TransportClosed);
        }

        // 后端预先知道大小时直接拒绝超限资源, 避免无谓的整体读取
        if let Some(size) = self.size() {
            if size > cap {
                return Err(TextsubError::ResourceTooLarge { size, cap });
            }
        }

        let mut out = Vec::new();

        // 先吃掉预读缓冲区中未消耗的数据
        if self.buf_pos < self.buf_len {
            out.extend_from_slice(&self.buffer[self.buf_pos..self.buf_len]);
            self.buf_pos = self.buf_len;
        }

        let mut chunk = [0u8; READ_CHUNK_SIZE];
        loop {
            if out.len() as u64 > cap {
                return Err(TextsubError::ResourceTooLarge {
                    size: out.len() as u64,
                    cap,
                });
            }
            let n = self
                .backend_mut()?
                .read(&mut chunk)
                .map_err(TextsubError::Io)?;
            if n == 0 {
                break;
            }
            out.extend_from_slice(&chunk[..n]);
        }

        Ok(out)
    }
}

/// 文件 I/O 后端
pub struct FileBackend {
    file: std::fs::File,
    size: Option<u64>,
}

impl FileBackend {
    /// 从已打开的文件创建后端
    pub fn new(file: std::fs::File) -> Self {
        let size = file.metadata().ok().map(|m| m.len());
        Self { file, size }
    }
}

impl IoBackend for FileBackend {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.file.read(buf)
    }

    fn size(&self) -> Option<u64> {
        self.size
    }
}

/// 内存缓冲区 I/O 后端
///
/// 用于测试和内存中处理.
pub struct MemoryBackend {
    /// 数据缓冲区
    data: Vec<u8>,
    /// 当前位置
    pos: usize,
}

impl MemoryBackend {
    /// 从已有数据创建
    pub fn from_data(data: Vec<u8>) -> Self {
        Self { data, pos: 0 }
    }
}

impl IoBackend for MemoryBackend {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let available = self.data.len().saturating_sub(self.pos);
        let to_read = buf.len().min(available);
        if to_read == 0 {
            return Ok(0);
        }
        buf[..to_read].copy_from_slice(&self.data[self.pos..self.pos + to_read]);
        self.pos += to_read;
        Ok(to_read)
    }

    fn size(&self) -> Option<u64> {
        Some(self.data.len() as u64)
    }
}
