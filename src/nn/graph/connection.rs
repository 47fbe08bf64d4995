/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : 连接：记录权重、梯度以及其关联的上下游节点。
 *                 连接统一存放在网络的连接池中，节点仅通过`ConnectionId`引用它
 */

use super::layer::Layer;
use super::node::{NodeId, TraitNode};
use std::fmt;

/// 连接在网络连接池中的下标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(pub(crate) usize);

impl ConnectionId {
    pub const fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct Connection {
    upstream_node: NodeId,
    downstream_node: NodeId,
    weight: f64,
    gradient: f64,
}

impl Connection {
    pub(crate) fn new(upstream_node: NodeId, downstream_node: NodeId, weight: f64) -> Self {
        Self {
            upstream_node,
            downstream_node,
            weight,
            gradient: 0.0,
        }
    }

    pub fn upstream_node(&self) -> NodeId {
        self.upstream_node
    }

    pub fn downstream_node(&self) -> NodeId {
        self.downstream_node
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub(crate) fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }

    /// 最近一次`calc_gradient`得到的梯度
    pub fn gradient(&self) -> f64 {
        self.gradient
    }

    /// 梯度 = 下游节点的delta × 上游节点的输出
    pub fn calc_gradient(&mut self, layers: &[Layer]) {
        let upstream_output = layers[self.upstream_node.layer_index]
            .node(self.upstream_node.node_index)
            .output();
        let downstream_delta = layers[self.downstream_node.layer_index]
            .node(self.downstream_node.node_index)
            .delta();
        self.gradient = downstream_delta * upstream_output;
    }

    /// 重新计算梯度后更新权重：w += rate·gradient。
    /// delta 已包含了误差下降的方向，因此这里是“加”
    pub fn update_weight(&mut self, layers: &[Layer], rate: f64) {
        self.calc_gradient(layers);
        self.weight += rate * self.gradient;
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}) -> ({}) = {:.6}",
            self.upstream_node, self.downstream_node, self.weight
        )
    }
}
