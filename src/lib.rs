//! # BP Network
//!
//! `bp_network`用纯rust实现全连接神经网络的反向传播训练，并提供两种内部表示：
//! - [`nn::graph`]：显式的节点、连接与层，逐节点计算输出与误差项；
//! - [`nn::fc`]：以矩阵运算实现的全连接层堆叠。
//!
//! 两者都支持前向预测、反向传播求梯度、梯度下降更新参数，以及用数值梯度做梯度检查。
//! 另附单个神经元的感知器与线性单元。
//!
//! 本库只通过`log`门面输出日志，不安装任何日志后端。
//!

pub mod data;
pub mod errors;
pub mod nn;
pub mod tensor;
pub mod utils;
