//! 数据模块
//!
//! 提供示例训练数据。
//!
//! # 主要组件
//!
//! - [`Dataset`]: 持有样本和标签的数据集
//! - [`and_truth_table`]: 与运算真值表（分类任务）
//! - [`salary_samples`]: 工作年限与月薪（回归任务）
//!
//! # 使用示例
//!
//! ```ignore
//! use bp_network::data::and_truth_table;
//! use bp_network::nn::graph::Network;
//!
//! let dataset = and_truth_table();
//! let mut network = Network::new_with_seed(&[2, 5, 1], 42)?;
//! network.train(&dataset.labels, &dataset.inputs, 0.1, 10000)?;
//! ```

#[cfg(test)]
mod tests;

/// 持有样本和标签的数据集，`inputs[i]`对应`labels[i]`
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub inputs: Vec<Vec<f64>>,
    pub labels: Vec<Vec<f64>>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// 各样本的第一个标签值，供单输出的感知器/线性单元使用
    pub fn scalar_labels(&self) -> Vec<f64> {
        self.labels.iter().filter_map(|label| label.first().copied()).collect()
    }
}

/// 与运算真值表：[1,1] -> 1，[0,0] -> 0，[1,0] -> 0，[0,1] -> 0
pub fn and_truth_table() -> Dataset {
    Dataset {
        inputs: vec![vec![1.0, 1.0], vec![0.0, 0.0], vec![1.0, 0.0], vec![0.0, 1.0]],
        labels: vec![vec![1.0], vec![0.0], vec![0.0], vec![0.0]],
    }
}

/// 虚构的5个人的工作年限与月薪
pub fn salary_samples() -> Dataset {
    Dataset {
        inputs: vec![vec![5.0], vec![3.0], vec![8.0], vec![1.4], vec![10.1]],
        labels: vec![
            vec![5500.0],
            vec![2300.0],
            vec![7600.0],
            vec![1800.0],
            vec![11400.0],
        ],
    }
}
