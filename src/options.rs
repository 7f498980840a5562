//! 解封装器配置项.

use crate::error::{TextsubError, TextsubResult};

/// 内容探测窗口的最小值 (字节)
pub const MIN_PROBE_SIZE: usize = 32;

/// 内容探测窗口的默认值 (字节)
pub const DEFAULT_PROBE_SIZE: usize = 128;

/// textsub 解封装器配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextsubOptions {
    /// 内容探测窗口大小 (字节), 合法范围 `[32, i32::MAX]`
    pub probe_size: usize,
}

impl Default for TextsubOptions {
    fn default() -> Self {
        Self {
            probe_size: DEFAULT_PROBE_SIZE,
        }
    }
}

impl TextsubOptions {
    /// 校验配置项取值范围
    pub fn validate(&self) -> TextsubResult<()> {
        if self.probe_size < MIN_PROBE_SIZE {
            return Err(TextsubError::InvalidArgument(format!(
                "probe_size 过小: {}, 最小 {}",
                self.probe_size, MIN_PROBE_SIZE
            )));
        }
        if self.probe_size > i32::MAX as usize {
            return Err(TextsubError::InvalidArgument(format!(
                "probe_size 过大: {}, 最大 {}",
                self.probe_size,
                i32::MAX
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_默认值() {
        let opts = TextsubOptions::default();
        assert_eq!(opts.probe_size, 128);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_取值范围() {
        // 恰好 32: 合法
        assert!(TextsubOptions { probe_size: 32 }.validate().is_ok());
        // 31: 非法
        assert!(TextsubOptions { probe_size: 31 }.validate().is_err());
        // 0: 非法
        assert!(TextsubOptions { probe_size: 0 }.validate().is_err());
        // i32::MAX: 合法
        assert!(
            TextsubOptions {
                probe_size: i32::MAX as usize
            }
            .validate()
            .is_ok()
        );
        // 超过 i32::MAX: 非法
        assert!(
            TextsubOptions {
                probe_size: i32::MAX as usize + 1
            }
            .validate()
            .is_err()
        );
    }
}
