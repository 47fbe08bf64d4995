/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : 矩阵版本的全连接网络：由若干全连接层依次堆叠而成
 */

use super::full_connected_layer::FullConnectedLayer;
use crate::errors::NetworkError;
use crate::nn::config::{DEFAULT_INIT_RANGE, NetworkConfig};
use crate::nn::gradient_check::{
    GRADIENT_CHECK_EPSILON, GradientCheckRecord, ParameterId, network_error,
};
use crate::nn::graph;
use crate::nn::validation::{
    check_dimension, validate_iterations, validate_layer_sizes, validate_rate,
    validate_sample_count, validate_training_set,
};
use crate::nn::{Activation, TraitActivation};
use crate::tensor::Tensor;
use log::{Level, debug, info, log_enabled};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

#[derive(Debug, Clone)]
pub struct Network {
    layers: Vec<FullConnectedLayer>,
    activation: Activation,
}

impl Network {
    /// `layer_sizes`依次为输入层、各隐藏层、输出层的节点数；
    /// 相邻两层之间对应一个全连接层，故共有`layer_sizes.len() - 1`个全连接层
    pub fn new(layer_sizes: &[usize]) -> Result<Self, NetworkError> {
        Self::with_rng(
            layer_sizes,
            Activation::default(),
            DEFAULT_INIT_RANGE,
            &mut StdRng::from_entropy(),
        )
    }

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

    pub fn with_rng<R: Rng>(
        layer_sizes: &[usize],
        activation: Activation,
        init_range: f64,
        rng: &mut R,
    ) -> Result<Self, NetworkError> {
        validate_layer_sizes(layer_sizes)?;
        let layers = layer_sizes
            .windows(2)
            .map(|pair| {
                FullConnectedLayer::new(pair[0], pair[1], activation, init_range, &mut *rng)
            })
            .collect::<Result<Vec<_>, _>>()?;
        info!("已构建矩阵网络：层结构{layer_sizes:?}");
        Ok(Self { layers, activation })
    }

    /// 复制节点图网络的全部权重：
    /// W[l][j][i] 取第l层第i号节点到第l+1层第j号节点的连接权重，
    /// b[l][j] 取第l层偏置节点到第l+1层第j号节点的连接权重。
    /// 节点图网络的偏置连接已被移除时返回错误
    pub fn from_graph_network(network: &graph::Network) -> Result<Self, NetworkError> {
        let layer_sizes = network.layer_sizes();
        let mut layers = Vec::with_capacity(layer_sizes.len() - 1);
        for (layer_index, pair) in layer_sizes.windows(2).enumerate() {
            let (input_size, output_size) = (pair[0], pair[1]);
            let mut w = Tensor::zeros(output_size, input_size);
            let mut b = Tensor::zeros(output_size, 1);
            for j in 0..output_size {
                for i in 0..input_size {
                    w[[j, i]] = network.weight(layer_index, i, j)?;
                }
                b[[j, 0]] = network.weight(layer_index, input_size, j)?;
            }
            layers.push(FullConnectedLayer::with_parameters(
                w,
                b,
                network.activation(),
            ));
        }
        Ok(Self {
            layers,
            activation: network.activation(),
        })
    }

    /// 前向传播，返回输出层的输出
    pub fn predict(&mut self, sample: &[f64]) -> Result<Vec<f64>, NetworkError> {
        self.check_sample(sample)?;
        Ok(self.forward(sample).to_vec())
    }

    fn forward(&mut self, sample: &[f64]) -> Tensor {
        let mut output = Tensor::column(sample);
        for layer in &mut self.layers {
            output = layer.forward(&output).clone();
        }
        output
    }

    /// 由输出层开始逐层反向计算各层的 W_grad 与 b_grad，不修改参数。
    /// 须在`predict`之后调用
    pub fn calc_gradient(&mut self, label: &[f64]) -> Result<(), NetworkError> {
        self.check_label(label)?;
        let output = self.output_layer().output();
        let mut delta = self.activation.backward_tensor(output) * (&Tensor::column(label) - output);
        for layer in self.layers.iter_mut().rev() {
            delta = layer.backward(&delta).clone();
        }
        Ok(())
    }

    /// 按各层缓存的梯度更新参数
    pub fn update_weight(&mut self, rate: f64) -> Result<(), NetworkError> {
        validate_rate(rate)?;
        for layer in &mut self.layers {
            layer.update(rate);
        }
        Ok(())
    }

    /// 用单个样本训练一次：predict → calc_gradient → update_weight
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
            "矩阵网络训练完成：{}个样本，{}轮，学习率{}",
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
        self.forward(sample);
        self.calc_gradient(label)?;
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

    /// 对每一层 W 和 b 的每个元素做梯度检查，约定与节点图版本一致
    pub fn gradient_check(
        &mut self,
        feature: &[f64],
        label: &[f64],
    ) -> Result<Vec<GradientCheckRecord>, NetworkError> {
        self.check_sample(feature)?;
        self.check_label(label)?;

        self.forward(feature);
        self.calc_gradient(label)?;

        let mut records = Vec::new();
        for layer_index in 0..self.layers.len() {
            let (rows, cols) = {
                let layer = &self.layers[layer_index];
                (layer.output_size(), layer.input_size())
            };
            for row in 0..rows {
                for col in 0..cols {
                    let actual = self.layers[layer_index].w_grad()[[row, col]];
                    let (error_minus, error_plus) = self.perturb(feature, label, |network| {
                        &mut network.layers[layer_index].w_mut()[[row, col]]
                    });
                    let record = GradientCheckRecord::new(
                        ParameterId::Weight {
                            layer: layer_index,
                            row,
                            col,
                        },
                        error_minus,
                        error_plus,
                        actual,
                    );
                    record.log();
                    records.push(record);
                }
                let actual = self.layers[layer_index].b_grad()[[row, 0]];
                let (error_minus, error_plus) = self.perturb(feature, label, |network| {
                    &mut network.layers[layer_index].b_mut()[[row, 0]]
                });
                let record = GradientCheckRecord::new(
                    ParameterId::Bias {
                        layer: layer_index,
                        row,
                    },
                    error_minus,
                    error_plus,
                    actual,
                );
                record.log();
                records.push(record);
            }
        }
        self.forward(feature);
        Ok(records)
    }

    /// 分别把参数加/减ε后求误差，返回(E(w-ε), E(w+ε))，结束时参数复原
    fn perturb<F>(&mut self, feature: &[f64], label: &[f64], parameter: F) -> (f64, f64)
    where
        F: Fn(&mut Self) -> &mut f64,
    {
        let unperturbed = *parameter(self);
        *parameter(self) = unperturbed + GRADIENT_CHECK_EPSILON;
        let error_plus = network_error(&self.forward(feature).to_vec(), label);
        *parameter(self) = unperturbed - GRADIENT_CHECK_EPSILON;
        let error_minus = network_error(&self.forward(feature).to_vec(), label);
        *parameter(self) = unperturbed;
        (error_minus, error_plus)
    }

    fn check_sample(&self, sample: &[f64]) -> Result<(), NetworkError> {
        check_dimension(self.input_size(), sample.len(), "样本长度与输入层节点数不一致")
    }

    fn check_label(&self, label: &[f64]) -> Result<(), NetworkError> {
        check_dimension(self.output_size(), label.len(), "标签长度与输出层节点数不一致")
    }

    pub fn layers(&self) -> &[FullConnectedLayer] {
        &self.layers
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    fn output_layer(&self) -> &FullConnectedLayer {
        &self.layers[self.layers.len() - 1]
    }

    pub fn input_size(&self) -> usize {
        self.layers[0].input_size()
    }

    pub fn output_size(&self) -> usize {
        self.output_layer().output_size()
    }

    pub fn layer_sizes(&self) -> Vec<usize> {
        std::iter::once(self.input_size())
            .chain(self.layers.iter().map(FullConnectedLayer::output_size))
            .collect()
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Network{:?}", self.layer_sizes())?;
        for (index, layer) in self.layers.iter().enumerate() {
            writeln!(f, "Layer {index}:")?;
            write!(f, "{layer}")?;
        }
        Ok(())
    }
}
