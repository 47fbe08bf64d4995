/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : 节点图版本的全连接网络。
 *                 所有层按顺序存放于`layers`，所有连接存放于连接池`connections`，
 *                 节点与连接之间只以下标互相引用
 */

use super::connection::{Connection, ConnectionId};
use super::layer::Layer;
use super::node::{NodeId, TraitNode};
use crate::errors::NetworkError;
use crate::nn::config::{DEFAULT_INIT_RANGE, NetworkConfig};
use crate::nn::gradient_check::network_error;
use crate::nn::validation::{
    check_dimension, validate_init_range, validate_iterations, validate_layer_sizes,
    validate_rate, validate_sample_count, validate_training_set,
};
use crate::nn::Activation;
use log::{Level, debug, info, log_enabled};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone)]
pub struct Network {
    layers: Vec<Layer>,
    connections: Vec<Connection>,
    activation: Activation,
}

impl Network {
    /// 以sigmoid为激活函数、权重随机初始化于[-0.1, 0.1)构建网络。
    /// `layer_sizes`依次为输入层、各隐藏层、输出层的节点数（不含偏置节点）
    pub fn new(layer_sizes: &[usize]) -> Result<Self, NetworkError> {
        Self::with_rng(
            layer_sizes,
            Activation::default(),
            DEFAULT_INIT_RANGE,
            &mut StdRng::from_entropy(),
        )
    }

    /// 同`new`，但权重由固定种子生成，便于复现
    pub fn new_with_seed(layer_sizes: &[usize], seed: u64) -> Result<Self, NetworkError> {
        Self::with_rng(
            layer_sizes,
            Activation::default(),
            DEFAULT_INIT_RANGE,
            &mut StdRng::seed_from_u64(seed),
        )
    }

    pub fn from_config(config: &NetworkConfig) -> Result<Self, NetworkError> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(&config.layers, config.activation, config.init_range, &mut rng)
    }

    /// 相邻两层全连接：上游层的每个节点（含偏置节点）连向下游层的每个普通节点，
    /// 权重服从[-init_range, init_range)上的均匀分布
    pub fn with_rng<R: Rng>(
        layer_sizes: &[usize],
        activation: Activation,
        init_range: f64,
        rng: &mut R,
    ) -> Result<Self, NetworkError> {
        validate_layer_sizes(layer_sizes)?;
        validate_init_range(init_range)?;

        let layers: Vec<Layer> = layer_sizes
            .iter()
            .enumerate()
            .map(|(layer_index, &node_count)| Layer::new(layer_index, node_count))
            .collect();

        let mut connections = Vec::new();
        for (layer_index, pair) in layer_sizes.windows(2).enumerate() {
            let (upstream_count, downstream_count) = (pair[0], pair[1]);
            // `upstream_count`号节点即上游层的偏置节点
            for upstream_index in 0..=upstream_count {
                for downstream_index in 0..downstream_count {
                    connections.push(Connection::new(
                        NodeId::new(layer_index, upstream_index),
                        NodeId::new(layer_index + 1, downstream_index),
                        rng.gen_range(-init_range..init_range),
                    ));
                }
            }
        }

        let mut network = Self {
            layers,
            connections,
            activation,
        };
        network.rewire()?;
        info!(
            "已构建节点图网络：层结构{:?}，连接数{}",
            layer_sizes,
            network.connections.len()
        );
        Ok(network)
    }

    /// 按连接池重建所有节点的上下游连接列表。
    /// 完成后每条连接恰好出现在一个上游列表和一个下游列表中
    fn rewire(&mut self) -> Result<(), NetworkError> {
        for layer in &mut self.layers {
            for node in layer.nodes_mut() {
                node.clear_connections();
            }
        }
        for (index, conn) in self.connections.iter().enumerate() {
            let id = ConnectionId(index);
            let upstream = conn.upstream_node();
            let downstream = conn.downstream_node();
            self.layers[upstream.layer_index]
                .node_mut(upstream.node_index)
                .append_downstream_connection(id);
            self.layers[downstream.layer_index]
                .node_mut(downstream.node_index)
                .append_upstream_connection(id)?;
        }
        Ok(())
    }

    /*↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓前向/反向传播↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓*/

    /// 前向传播，返回输出层各普通节点的输出
    pub fn predict(&mut self, sample: &[f64]) -> Result<Vec<f64>, NetworkError> {
        self.layers[0].set_output(sample)?;
        for layer_index in 1..self.layers.len() {
            let (upstream, rest) = self.layers.split_at_mut(layer_index);
            rest[0].calc_output(
                &upstream[layer_index - 1],
                &self.connections,
                &self.activation,
            );
        }
        Ok(self.output_layer().outputs())
    }

    /// 反向传播误差项：先算输出层，再由后往前逐层计算（含输入层）。
    /// 须在`predict`之后调用
    pub fn calc_delta(&mut self, label: &[f64]) -> Result<(), NetworkError> {
        self.check_label(label)?;
        let last = self.layers.len() - 1;
        self.layers[last].calc_output_layer_delta(label, &self.activation);
        for layer_index in (0..last).rev() {
            let (head, tail) = self.layers.split_at_mut(layer_index + 1);
            head[layer_index].calc_hidden_layer_delta(
                &tail[0],
                &self.connections,
                &self.activation,
            );
        }
        Ok(())
    }

    /// 只计算并缓存每条连接的梯度，不修改权重
    pub fn calc_gradient(&mut self) {
        for conn in &mut self.connections {
            conn.calc_gradient(&self.layers);
        }
    }

    /// 按各连接的梯度更新权重。须在`calc_delta`之后调用
    pub fn update_weight(&mut self, rate: f64) -> Result<(), NetworkError> {
        validate_rate(rate)?;
        for conn in &mut self.connections {
            conn.update_weight(&self.layers, rate);
        }
        Ok(())
    }

    /*↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑前向/反向传播↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑*/

    /// 用单个样本训练一次：predict → calc_delta → update_weight。
    /// 所有参数先校验，校验不通过时网络状态不变
    pub fn train_one_sample(
        &mut self,
        label: &[f64],
        sample: &[f64],
        rate: f64,
    ) -> Result<(), NetworkError> {
        validate_rate(rate)?;
        self.check_sample(sample)?;
        self.check_label(label)?;
        self.train_sample(label, sample, rate)
    }

    /// 以`rate`为学习率把整个训练集按顺序训练`iterations`轮
    pub fn train(
        &mut self,
        labels: &[Vec<f64>],
        data_set: &[Vec<f64>],
        rate: f64,
        iterations: usize,
    ) -> Result<(), NetworkError> {
        validate_rate(rate)?;
        validate_iterations(iterations)?;
        validate_training_set(labels, data_set, self.input_size(), self.output_size())?;

        for epoch in 0..iterations {
            for (label, sample) in labels.iter().zip(data_set) {
                self.train_sample(label, sample, rate)?;
            }
            if log_enabled!(Level::Debug) {
                debug!(
                    "第{}轮训练结束，总误差：{:.6}",
                    epoch + 1,
                    self.total_error(labels, data_set)?
                );
            }
        }
        info!(
            "节点图网络训练完成：{}个样本，{}轮，学习率{}",
            data_set.len(),
            iterations,
            rate
        );
        Ok(())
    }

    fn train_sample(
        &mut self,
        label: &[f64],
        sample: &[f64],
        rate: f64,
    ) -> Result<(), NetworkError> {
        self.predict(sample)?;
        self.calc_delta(label)?;
        self.update_weight(rate)
    }

    /// 整个数据集上的误差之和
    pub fn total_error(
        &mut self,
        labels: &[Vec<f64>],
        data_set: &[Vec<f64>],
    ) -> Result<f64, NetworkError> {
        validate_sample_count(labels.len(), data_set.len())?;
        let mut total = 0.0;
        for (label, sample) in labels.iter().zip(data_set) {
            self.check_label(label)?;
            let prediction = self.predict(sample)?;
            total += network_error(&prediction, label);
        }
        Ok(total)
    }

    /*↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓权重访问↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓*/

    /// 第`layer_index`层第`upstream_index`号节点到下一层第`downstream_index`号节点的连接权重。
    /// `upstream_index`等于该层普通节点数时即为偏置节点
    pub fn weight(
        &self,
        layer_index: usize,
        upstream_index: usize,
        downstream_index: usize,
    ) -> Result<f64, NetworkError> {
        let index = self.find_connection(layer_index, upstream_index, downstream_index)?;
        Ok(self.connections[index.index()].weight())
    }

    pub fn set_weight(
        &mut self,
        layer_index: usize,
        upstream_index: usize,
        downstream_index: usize,
        weight: f64,
    ) -> Result<(), NetworkError> {
        let index = self.find_connection(layer_index, upstream_index, downstream_index)?;
        self.connections[index.index()].set_weight(weight);
        Ok(())
    }

    fn find_connection(
        &self,
        layer_index: usize,
        upstream_index: usize,
        downstream_index: usize,
    ) -> Result<ConnectionId, NetworkError> {
        let upstream = NodeId::new(layer_index, upstream_index);
        let downstream = NodeId::new(layer_index + 1, downstream_index);
        self.connections
            .iter()
            .position(|conn| {
                conn.upstream_node() == upstream && conn.downstream_node() == downstream
            })
            .map(ConnectionId)
            .ok_or_else(|| {
                NetworkError::InvalidOperation(format!(
                    "不存在连接({upstream}) -> ({downstream})"
                ))
            })
    }

    pub(super) fn connection_mut(&mut self, id: ConnectionId) -> &mut Connection {
        &mut self.connections[id.index()]
    }

    /// 移除所有从偏置节点发出的连接并重建连接池，移除后网络不再有偏置项
    pub fn remove_bias_connections(&mut self) -> Result<(), NetworkError> {
        let before = self.connections.len();
        let layers = &self.layers;
        self.connections.retain(|conn| {
            let upstream = conn.upstream_node();
            !layers[upstream.layer_index]
                .node(upstream.node_index)
                .is_bias()
        });
        self.rewire()?;
        info!(
            "已移除{}条偏置连接，剩余{}条连接",
            before - self.connections.len(),
            self.connections.len()
        );
        Ok(())
    }

    /*↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑权重访问↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑*/

    pub(super) fn check_sample(&self, sample: &[f64]) -> Result<(), NetworkError> {
        check_dimension(self.input_size(), sample.len(), "样本长度与输入层节点数不一致")
    }

    pub(super) fn check_label(&self, label: &[f64]) -> Result<(), NetworkError> {
        check_dimension(self.output_size(), label.len(), "标签长度与输出层节点数不一致")
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    fn output_layer(&self) -> &Layer {
        &self.layers[self.layers.len() - 1]
    }

    pub fn input_size(&self) -> usize {
        self.layers[0].node_count()
    }

    pub fn output_size(&self) -> usize {
        self.output_layer().node_count()
    }

    /// 每层普通节点的个数
    pub fn layer_sizes(&self) -> Vec<usize> {
        self.layers.iter().map(Layer::node_count).collect()
    }
}
