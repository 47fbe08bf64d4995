/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : 层：按顺序持有`node_count`个普通节点，最后附加一个偏置节点
 */

use super::connection::Connection;
use super::node::{BiasNode, Node, RealNode, TraitNode};
use crate::errors::NetworkError;
use crate::nn::validation::check_dimension;
use crate::nn::Activation;
use std::fmt;

#[derive(Debug, Clone)]
pub struct Layer {
    layer_index: usize,
    nodes: Vec<Node>,
}

impl Layer {
    pub fn new(layer_index: usize, node_count: usize) -> Self {
        let mut nodes: Vec<Node> = (0..node_count)
            .map(|node_index| RealNode::new(layer_index, node_index).into())
            .collect();
        nodes.push(BiasNode::new(layer_index, node_count).into());
        Self { layer_index, nodes }
    }

    pub fn layer_index(&self) -> usize {
        self.layer_index
    }

    /// 所有节点，最后一个为偏置节点
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, node_index: usize) -> &Node {
        &self.nodes[node_index]
    }

    pub(crate) fn node_mut(&mut self, node_index: usize) -> &mut Node {
        &mut self.nodes[node_index]
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    /// 普通节点（不含偏置节点）的个数
    pub fn node_count(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn bias_node(&self) -> &Node {
        &self.nodes[self.node_count()]
    }

    /// 设置层的输出，仅用于输入层。`data`的长度须等于普通节点个数
    pub fn set_output(&mut self, data: &[f64]) -> Result<(), NetworkError> {
        check_dimension(
            self.node_count(),
            data.len(),
            &format!("第{}层的输入向量长度与节点数不一致", self.layer_index),
        )?;
        for (node, &value) in self.real_nodes_mut().zip(data) {
            node.set_output(value);
        }
        Ok(())
    }

    /// 计算所有普通节点的输出（偏置节点的输出恒为1）
    pub fn calc_output(
        &mut self,
        upstream_layer: &Layer,
        connections: &[Connection],
        activation: &Activation,
    ) {
        for node in self.real_nodes_mut() {
            node.calc_output(upstream_layer, connections, activation);
        }
    }

    /// 作为输出层，按标签计算每个普通节点的delta。调用方须保证标签长度已校验
    pub(crate) fn calc_output_layer_delta(&mut self, label: &[f64], activation: &Activation) {
        for (node, &target) in self.real_nodes_mut().zip(label) {
            node.calc_output_layer_delta(target, activation);
        }
    }

    /// 作为隐藏层（或输入层），计算所有节点（含偏置节点）的delta
    pub(crate) fn calc_hidden_layer_delta(
        &mut self,
        downstream_layer: &Layer,
        connections: &[Connection],
        activation: &Activation,
    ) {
        for node in &mut self.nodes {
            node.calc_hidden_layer_delta(downstream_layer, connections, activation);
        }
    }

    /// 普通节点的输出向量
    pub fn outputs(&self) -> Vec<f64> {
        self.nodes[..self.node_count()]
            .iter()
            .map(TraitNode::output)
            .collect()
    }

    fn real_nodes_mut(&mut self) -> impl Iterator<Item = &mut RealNode> {
        self.nodes.iter_mut().filter_map(|node| match node {
            Node::Real(real) => Some(real),
            Node::Bias(_) => None,
        })
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{node}")?;
        }
        Ok(())
    }
}
