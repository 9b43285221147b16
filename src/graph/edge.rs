//! 边定义
//!
//! 原始边与残量边共用同一结构：原始边记录容量与流量，
//! 残量边的 `capacity` 即残量容量，`flow` 不使用

use crate::error::{Error, Result};
use crate::types::Capacity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 边
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// 容量
    capacity: Capacity,
    /// 当前流量
    flow: Capacity,
}

impl Edge {
    /// 创建容量为 `capacity`、流量为 0 的边
    pub fn new(capacity: Capacity) -> Self {
        Self { capacity, flow: 0 }
    }

    /// 获取容量
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// 获取流量
    pub fn flow(&self) -> Capacity {
        self.flow
    }

    /// 剩余可推送的流量
    pub fn remaining(&self) -> Capacity {
        self.capacity.saturating_sub(self.flow)
    }

    /// 是否已满载
    pub fn is_saturated(&self) -> bool {
        self.flow == self.capacity
    }

    /// 增加流量，超过容量时报错
    pub(crate) fn push_flow(&mut self, amount: Capacity) -> Result<()> {
        let flow = self
            .flow
            .checked_add(amount)
            .filter(|f| *f <= self.capacity)
            .ok_or_else(|| {
                Error::internal(format!(
                    "流量超过容量: {} + {} > {}",
                    self.flow, amount, self.capacity
                ))
            })?;
        self.flow = flow;
        Ok(())
    }

    /// 抵消流量，不允许出现负流量
    pub(crate) fn cancel_flow(&mut self, amount: Capacity) -> Result<()> {
        self.flow = self.flow.checked_sub(amount).ok_or_else(|| {
            Error::internal(format!("流量变为负数: {} - {}", self.flow, amount))
        })?;
        Ok(())
    }

    /// 增加残量容量
    pub(crate) fn grow(&mut self, amount: Capacity) -> Result<()> {
        self.capacity = self
            .capacity
            .checked_add(amount)
            .ok_or_else(|| Error::internal("残量容量溢出"))?;
        Ok(())
    }

    /// 减少残量容量
    pub(crate) fn shrink(&mut self, amount: Capacity) -> Result<()> {
        self.capacity = self.capacity.checked_sub(amount).ok_or_else(|| {
            Error::internal(format!(
                "残量容量变为负数: {} - {}",
                self.capacity, amount
            ))
        })?;
        Ok(())
    }

    pub(crate) fn reset_flow(&mut self) {
        self.flow = 0;
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c = {} f = {}", self.capacity, self.flow)
    }
}
