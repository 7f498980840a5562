//! 字幕内容探测.
//!
//! 当文件扩展名无法判断格式时, 对资源开头的有限字节做内容分类.
//! 分类器通过 trait 注入, 宿主可以替换为自己的实现.

/// 内容分类结果标签
///
/// 分类器的输出集合是开放的: 未来可能加入新格式,
/// 因此消费方必须显式匹配, 未知标签一律当作 [`ProbeTag::Unknown`] 处理.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProbeTag {
    /// 无法识别
    Unknown,
    /// WebVTT 文本字幕
    WebVtt,
    /// YouTube srv3 (timedtext) XML 字幕
    Srv3,
}

/// 内容分类器 trait
///
/// 输入是资源开头的有限字节 (由 `probe_size` 配置决定长度上限),
/// 输出一个格式标签. 分类器不得假设拿到的是完整文件.
pub trait ContentProbe {
    /// 对数据前缀做格式分类
    fn classify(&self, data: &[u8]) -> ProbeTag;
}

/// UTF-8 BOM
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// 内置启发式分类器
///
/// 识别 WebVTT 魔数与 srv3/ytt 的 timedtext XML 根元素.
/// 只看数据前缀, 不做完整解析.
#[derive(Debug, Default)]
pub struct TextProbe;

impl TextProbe {
    fn is_webvtt(data: &[u8]) -> bool {
        // WebVTT 规范: 文件以 "WEBVTT" 开头, 可带 UTF-8 BOM,
        // 魔数之后必须是行尾、空格、制表符或 EOF
        let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);
        let Some(rest) = data.strip_prefix(b"WEBVTT") else {
            return false;
        };
        matches!(rest.first(), None | Some(b'\n' | b'\r' | b' ' | b'\t'))
    }

    fn is_srv3(data: &[u8]) -> bool {
        // srv3 是 XML, 根元素为 <timedtext>, 前面可能有 BOM 和 XML 声明
        let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);
        let mut rest = data;
        if rest.starts_with(b"<?xml") {
            match rest.windows(2).position(|w| w == b"?>") {
                Some(end) => rest = &rest[end + 2..],
                // 声明未出现在探测窗口内, 放弃
                None => return false,
            }
        }
        // 跳过空白
        while let Some((first, tail)) = rest.split_first() {
            if first.is_ascii_whitespace() {
                rest = tail;
            } else {
                break;
            }
        }
        rest.starts_with(b"<timedtext")
    }
}

impl ContentProbe for TextProbe {
    fn classify(&self, data: &[u8]) -> ProbeTag {
        if Self::is_webvtt(data) {
            ProbeTag::WebVtt
        } else if Self::is_srv3(data) {
            ProbeTag::Srv3
        } else {
            ProbeTag::Unknown
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_识别_webvtt() {
        let probe = TextProbe;
        assert_eq!(probe.classify(b"WEBVTT\n\n00:00.000 --> "), ProbeTag::WebVtt);
        assert_eq!(probe.classify(b"WEBVTT"), ProbeTag::WebVtt);
        assert_eq!(probe.classify(b"WEBVTT - comment\n"), ProbeTag::WebVtt);
        assert_eq!(probe.classify(b"\xEF\xBB\xBFWEBVTT\r\n"), ProbeTag::WebVtt);
    }

    #[test]
    fn test_webvtt_魔数后必须是分隔符() {
        let probe = TextProbe;
        assert_eq!(probe.classify(b"WEBVTTX"), ProbeTag::Unknown);
    }

    #[test]
    fn test_识别_srv3() {
        let probe = TextProbe;
        assert_eq!(probe.classify(b"<timedtext format=\"3\">"), ProbeTag::Srv3);
        assert_eq!(
            probe.classify(b"<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<timedtext>"),
            ProbeTag::Srv3
        );
    }

    #[test]
    fn test_无法识别() {
        let probe = TextProbe;
        assert_eq!(probe.classify(b""), ProbeTag::Unknown);
        assert_eq!(probe.classify(b"1\n00:00:01,000 --> 00:00:02,000\nhi"), ProbeTag::Unknown);
        assert_eq!(probe.classify(b"<?xml version=\"1.0\"?><other/>"), ProbeTag::Unknown);
    }
}
