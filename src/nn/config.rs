/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : 网络配置：网络结构与训练超参数（只描述如何构建/训练，不保存训练得到的参数）
 */

use super::validation::{
    validate_init_range, validate_iterations, validate_layer_sizes, validate_rate,
};
use super::Activation;
use crate::errors::NetworkError;
use serde::{Deserialize, Serialize};

/// 权重初始化范围的默认值：权重服从 [-0.1, 0.1) 上的均匀分布
pub const DEFAULT_INIT_RANGE: f64 = 0.1;
pub const DEFAULT_LEARNING_RATE: f64 = 0.1;
pub const DEFAULT_ITERATIONS: usize = 1000;

/// 两种网络实现共用的配置
///
/// # 示例
/// ```ignore
/// let config = NetworkConfig::from_json_str(r#"{"layers": [2, 5, 1], "seed": 42}"#)?;
/// let mut network = graph::Network::from_config(&config)?;
/// network.train(&labels, &data_set, config.learning_rate, config.iterations)?;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// 每层的节点数（不含偏置节点），第一个为输入层，最后一个为输出层
    pub layers: Vec<usize>,
    /// 权重初始化的随机种子，None 表示每次都不同
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub activation: Activation,
    #[serde(default = "default_init_range")]
    pub init_range: f64,
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,
    #[serde(default = "default_iterations")]
    pub iterations: usize,
}

const fn default_init_range() -> f64 {
    DEFAULT_INIT_RANGE
}

const fn default_learning_rate() -> f64 {
    DEFAULT_LEARNING_RATE
}

const fn default_iterations() -> usize {
    DEFAULT_ITERATIONS
}

impl NetworkConfig {
    pub fn new(layers: &[usize]) -> Self {
        Self {
            layers: layers.to_vec(),
            seed: None,
            activation: Activation::default(),
            init_range: DEFAULT_INIT_RANGE,
            learning_rate: DEFAULT_LEARNING_RATE,
            iterations: DEFAULT_ITERATIONS,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// 从 JSON 字符串解析配置，解析后立即校验
    pub fn from_json_str(json: &str) -> Result<Self, NetworkError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String, NetworkError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 校验所有字段，任一不合法即返回`InvalidConfiguration`
    pub fn validate(&self) -> Result<(), NetworkError> {
        validate_layer_sizes(&self.layers)?;
        validate_init_range(self.init_range)?;
        validate_rate(self.learning_rate)?;
        validate_iterations(self.iterations)
    }
}
