/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : 节点图版本的节点：普通节点（RealNode）与输出恒为1的偏置节点（BiasNode）。
 *                 节点只记录连接在网络连接池中的下标，不持有连接本身，
 *                 计算时由所属网络传入相邻层和连接池
 */

use super::connection::{Connection, ConnectionId};
use super::layer::Layer;
use crate::errors::NetworkError;
use crate::nn::{Activation, TraitActivation};
use enum_dispatch::enum_dispatch;
use std::fmt;

/// 偏置节点的输出
pub const BIAS_OUTPUT: f64 = 1.0;

/// 节点标识：所属层的编号 + 在层内的编号
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub layer_index: usize,
    pub node_index: usize,
}

impl NodeId {
    pub const fn new(layer_index: usize, node_index: usize) -> Self {
        Self {
            layer_index,
            node_index,
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.layer_index, self.node_index)
    }
}

#[enum_dispatch]
#[derive(Debug, Clone)]
pub enum Node {
    Real(RealNode),
    Bias(BiasNode),
}

#[enum_dispatch(Node)]
pub trait TraitNode {
    fn id(&self) -> NodeId;

    fn output(&self) -> f64;

    fn delta(&self) -> f64;

    /// 上游连接（偏置节点恒为空）
    fn upstream(&self) -> &[ConnectionId] {
        &[]
    }

    fn downstream(&self) -> &[ConnectionId];

    fn append_downstream_connection(&mut self, conn: ConnectionId);

    fn append_upstream_connection(&mut self, _conn: ConnectionId) -> Result<(), NetworkError> {
        Err(NetworkError::InvalidOperation(format!(
            "节点{}不接受上游连接",
            self.id()
        )))
    }

    /// 清空上下游连接（仅在网络重新连线时使用）
    fn clear_connections(&mut self);

    /// 节点属于隐藏层时，根据下游节点的delta计算本节点的delta：
    /// δ = f'(a)·Σ(δ_下游·w)
    fn calc_hidden_layer_delta(
        &mut self,
        downstream_layer: &Layer,
        connections: &[Connection],
        activation: &Activation,
    );

    fn is_bias(&self) -> bool {
        false
    }
}

/// 沿下游连接把下游节点的delta按权重加总
fn downstream_error(
    downstream: &[ConnectionId],
    downstream_layer: &Layer,
    connections: &[Connection],
) -> f64 {
    downstream
        .iter()
        .map(|&conn_id| {
            let conn = &connections[conn_id.index()];
            downstream_layer.node(conn.downstream_node().node_index).delta() * conn.weight()
        })
        .sum()
}

// ========== 普通节点 ==========

/// 普通节点：记录自身的输出值和误差项，以及与之相关的上下游连接
#[derive(Debug, Clone)]
pub struct RealNode {
    id: NodeId,
    downstream: Vec<ConnectionId>,
    upstream: Vec<ConnectionId>,
    output: f64,
    delta: f64,
}

impl RealNode {
    pub fn new(layer_index: usize, node_index: usize) -> Self {
        Self {
            id: NodeId::new(layer_index, node_index),
            downstream: Vec::new(),
            upstream: Vec::new(),
            output: 0.0,
            delta: 0.0,
        }
    }

    /// 设置节点的输出值，仅用于输入层
    pub fn set_output(&mut self, output: f64) {
        self.output = output;
    }

    /// a = f(Σ(a_上游·w))。偏置经由偏置节点发出的连接进入求和，无需特殊处理
    pub fn calc_output(
        &mut self,
        upstream_layer: &Layer,
        connections: &[Connection],
        activation: &Activation,
    ) {
        let weighted_input: f64 = self
            .upstream
            .iter()
            .map(|&conn_id| {
                let conn = &connections[conn_id.index()];
                upstream_layer.node(conn.upstream_node().node_index).output() * conn.weight()
            })
            .sum();
        self.output = activation.forward(weighted_input);
    }

    /// 节点属于输出层时：δ = f'(a)·(t - a)
    pub fn calc_output_layer_delta(&mut self, label: f64, activation: &Activation) {
        self.delta = activation.backward(self.output) * (label - self.output);
    }
}

impl TraitNode for RealNode {
    fn id(&self) -> NodeId {
        self.id
    }

    fn output(&self) -> f64 {
        self.output
    }

    fn delta(&self) -> f64 {
        self.delta
    }

    fn upstream(&self) -> &[ConnectionId] {
        &self.upstream
    }

    fn downstream(&self) -> &[ConnectionId] {
        &self.downstream
    }

    fn append_downstream_connection(&mut self, conn: ConnectionId) {
        self.downstream.push(conn);
    }

    fn append_upstream_connection(&mut self, conn: ConnectionId) -> Result<(), NetworkError> {
        self.upstream.push(conn);
        Ok(())
    }

    fn clear_connections(&mut self) {
        self.downstream.clear();
        self.upstream.clear();
    }

    fn calc_hidden_layer_delta(
        &mut self,
        downstream_layer: &Layer,
        connections: &[Connection],
        activation: &Activation,
    ) {
        let error = downstream_error(&self.downstream, downstream_layer, connections);
        self.delta = activation.backward(self.output) * error;
    }
}

// ========== 偏置节点 ==========

/// 偏置节点：输出恒为1，没有上游连接，其下游连接的权重即为下游节点的偏置项
#[derive(Debug, Clone)]
pub struct BiasNode {
    id: NodeId,
    downstream: Vec<ConnectionId>,
    delta: f64,
}

impl BiasNode {
    pub fn new(layer_index: usize, node_index: usize) -> Self {
        Self {
            id: NodeId::new(layer_index, node_index),
            downstream: Vec::new(),
            delta: 0.0,
        }
    }
}

impl TraitNode for BiasNode {
    fn id(&self) -> NodeId {
        self.id
    }

    fn output(&self) -> f64 {
        BIAS_OUTPUT
    }

    fn delta(&self) -> f64 {
        self.delta
    }

    fn downstream(&self) -> &[ConnectionId] {
        &self.downstream
    }

    fn append_downstream_connection(&mut self, conn: ConnectionId) {
        self.downstream.push(conn);
    }

    fn clear_connections(&mut self) {
        self.downstream.clear();
    }

    // 偏置节点没有上游，其delta不会被任何节点使用
    fn calc_hidden_layer_delta(
        &mut self,
        downstream_layer: &Layer,
        connections: &[Connection],
        activation: &Activation,
    ) {
        let error = downstream_error(&self.downstream, downstream_layer, connections);
        self.delta = activation.backward(BIAS_OUTPUT) * error;
    }

    fn is_bias(&self) -> bool {
        true
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Real(node) => write!(
                f,
                "{}: output: {:.6} delta: {:.6}",
                node.id, node.output, node.delta
            ),
            Node::Bias(node) => write!(f, "{}: output: 1", node.id),
        }
    }
}
