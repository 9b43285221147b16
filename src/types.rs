//! 通用类型定义

/// 容量与流量（非负整数）
pub type Capacity = u64;

/// 遍历方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// 沿原始边方向（u -> v）
    Forward,
    /// 逆原始边方向（沿反向残量边抵消流量）
    Backward,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Backward => "backward",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
