//! 字幕格式解析.
//!
//! 把文件名和/或内容探测结果映射为编解码器描述.
//! 优先级: 扩展名匹配在前, 内容探测兜底.

use log::debug;

use crate::error::TextsubResult;
use crate::io::IoContext;
use crate::probe::{ContentProbe, ProbeTag};

/// 格式对应的编解码器信息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatInfo {
    /// 编解码器标识, 交给下游解码器选择实现
    pub codec: &'static str,
    /// 人类可读的格式名称
    pub codec_desc: &'static str,
}

/// WebVTT
const FORMAT_WEBVTT: FormatInfo = FormatInfo {
    codec: "textsub/vtt",
    codec_desc: "WebVTT",
};

/// YouTube srv3 (timedtext)
const FORMAT_SRV3: FormatInfo = FormatInfo {
    codec: "textsub/srv3",
    codec_desc: "srv3",
};

/// 扩展名规则
struct ExtensionRule {
    /// 文件名后缀, 含 `.`
    suffix: &'static str,
    /// 对应的格式
    info: FormatInfo,
}

/// 扩展名规则表, 按声明顺序遍历, 后匹配者覆盖先匹配者.
///
/// 当前表中的后缀互不为对方的后缀, 覆盖语义不产生差别;
/// 若将来加入有包含关系的后缀, 声明顺序开始影响结果.
/// 后缀比较是大小写敏感的精确比较.
const EXTENSION_RULES: &[ExtensionRule] = &[
    ExtensionRule {
        suffix: ".vtt",
        info: FORMAT_WEBVTT,
    },
    ExtensionRule {
        suffix: ".srv3",
        info: FORMAT_SRV3,
    },
    ExtensionRule {
        suffix: ".ytt",
        info: FORMAT_SRV3,
    },
];

/// 把分类器标签映射为格式信息
///
/// 显式匹配而非按序号索引: 分类器的标签集合是开放的,
/// 未知标签一律映射为 None, 不允许越界.
pub fn format_for_tag(tag: ProbeTag) -> Option<FormatInfo> {
    match tag {
        ProbeTag::WebVtt => Some(FORMAT_WEBVTT),
        ProbeTag::Srv3 => Some(FORMAT_SRV3),
        _ => None,
    }
}

/// 根据文件名猜测格式 (只看扩展名规则表)
pub fn format_from_filename(filename: &str) -> Option<FormatInfo> {
    let mut resolved = None;
    for rule in EXTENSION_RULES {
        if filename.ends_with(rule.suffix) {
            resolved = Some(rule.info);
        }
    }
    resolved
}

/// 解析资源的字幕格式
///
/// 1. 扩展名命中时直接采用, 不看内容;
/// 2. 否则预读最多 `probe_size` 字节交给分类器.
///
/// 预读不推进 `io` 的读取位置. 两步都未命中时返回 `Ok(None)`,
/// 这是正常结果而非错误.
pub fn resolve(
    filename: &str,
    io: &mut IoContext,
    probe: &dyn ContentProbe,
    probe_size: usize,
) -> TextsubResult<Option<FormatInfo>> {
    if let Some(info) = format_from_filename(filename) {
        debug!("textsub: 扩展名命中 {} -> {}", filename, info.codec);
        return Ok(Some(info));
    }

    let head = io.peek(probe_size)?;
    let tag = probe.classify(head);
    let info = format_for_tag(tag);
    debug!(
        "textsub: 内容探测 {} 字节, 标签 {:?} -> {:?}",
        head.len(),
        tag,
        info.map(|i| i.codec)
    );
    Ok(info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{IoContext, MemoryBackend};
    use crate::probe::TextProbe;

    fn memory_io(data: &[u8]) -> IoContext {
        IoContext::new(Box::new(MemoryBackend::from_data(data.to_vec())))
    }

    #[test]
    fn test_扩展名表() {
        assert_eq!(format_from_filename("clip.vtt"), Some(FORMAT_WEBVTT));
        assert_eq!(format_from_filename("clip.srv3"), Some(FORMAT_SRV3));
        assert_eq!(format_from_filename("clip.ytt"), Some(FORMAT_SRV3));
        assert_eq!(format_from_filename("clip.srt"), None);
        assert_eq!(format_from_filename(""), None);
    }

    #[test]
    fn test_扩展名大小写敏感() {
        // 策略: 精确后缀比较, 大写扩展名落入内容探测
        assert_eq!(format_from_filename("Clip.VTT"), None);
        assert_eq!(format_from_filename("Clip.Vtt"), None);
    }

    #[test]
    fn test_扩展名优先于内容() {
        // 内容是 srv3, 但扩展名说 vtt: 扩展名胜出
        let mut io = memory_io(b"<timedtext format=\"3\"/>");
        let info = resolve("a.vtt", &mut io, &TextProbe, 128).unwrap();
        assert_eq!(info, Some(FORMAT_WEBVTT));
    }

    #[test]
    fn test_内容探测兜底() {
        let mut io = memory_io(b"WEBVTT\n\n00:00.000 --> 00:01.000\nhi\n");
        let info = resolve("clip.unknown", &mut io, &TextProbe, 128).unwrap();
        assert_eq!(info, Some(FORMAT_WEBVTT));

        let mut io = memory_io(b"<timedtext format=\"3\"><body/></timedtext>");
        let info = resolve("clip.unknown", &mut io, &TextProbe, 128).unwrap();
        assert_eq!(info, Some(FORMAT_SRV3));
    }

    #[test]
    fn test_两步均未命中() {
        let mut io = memory_io(b"plain text, nothing here");
        let info = resolve("clip.unknown", &mut io, &TextProbe, 128).unwrap();
        assert_eq!(info, None);
    }

    #[test]
    fn test_探测不消耗数据() {
        let content = b"WEBVTT\n\nbody".to_vec();
        let mut io = memory_io(&content);
        resolve("clip.unknown", &mut io, &TextProbe, 128).unwrap();
        assert_eq!(io.read_to_end(1024).unwrap(), content);
    }

    #[test]
    fn test_探测窗口受限() {
        // 窗口只有 32 字节时, 分类器只能看到前 32 字节
        let mut data = b"WEBVTT\n".to_vec();
        data.extend_from_slice(&vec![b'x'; 1024]);
        let mut io = memory_io(&data);
        let info = resolve("clip.unknown", &mut io, &TextProbe, 32).unwrap();
        assert_eq!(info, Some(FORMAT_WEBVTT));
    }

    #[test]
    fn test_未知标签映射为空() {
        assert_eq!(format_for_tag(ProbeTag::Unknown), None);
    }
}
