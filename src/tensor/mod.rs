/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : 二阶张量（矩阵），供矩阵版全连接网络使用。
 *                 向量统一以列向量（形状为[n, 1]）表示。
 */

use ndarray::Array2;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use crate::errors::TensorError;

mod ops {
    pub mod add;
    pub mod mat_mul;
    pub mod mul;
    pub mod others;
    pub mod sub;
}

mod index;
mod print;
mod property;

#[cfg(test)]
mod tests;

/// 定义张量的结构体。本库只需要矩阵运算，故张量固定为2阶：
/// 标量的形状为[1, 1]，列向量为[n, 1]，行向量为[1, n]，矩阵为[n, m]。
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor {
    data: Array2<f64>,
}

impl Tensor {
    /// 按行优先顺序用`data`创建一个形状为`shape`的张量。
    /// `shape`必须恰有2个元素，且`data`的长度必须和`shape`中所有元素的乘积相等，否则会panic。
    pub fn new(data: &[f64], shape: &[usize]) -> Tensor {
        assert!(
            shape.len() == 2 && data.len() == shape.iter().product::<usize>(),
            "{}",
            TensorError::DataShapeMismatch {
                data_len: data.len(),
                shape: shape.to_vec(),
            }
        );
        let data = Array2::from_shape_vec((shape[0], shape[1]), data.to_vec()).unwrap();
        Tensor { data }
    }

    /// 将一个纯数切片转为形状为[n, 1]的列向量
    pub fn column(data: &[f64]) -> Tensor {
        Tensor {
            data: Array2::from_shape_fn((data.len(), 1), |(i, _)| data[i]),
        }
    }

    pub fn zeros(rows: usize, cols: usize) -> Tensor {
        Tensor {
            data: Array2::zeros((rows, cols)),
        }
    }

    /// 创建一个随机张量，其值服从[min, max)上的均匀分布。
    /// 随机源由调用方传入，以便固定种子复现结果。
    pub fn random_uniform<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        min: f64,
        max: f64,
        rng: &mut R,
    ) -> Tensor {
        let uniform = Uniform::new(min, max);
        Tensor {
            data: Array2::from_shape_simple_fn((rows, cols), || uniform.sample(&mut *rng)),
        }
    }
}

// 私有方法
impl Tensor {
    fn assert_same_shape(&self, other: &Tensor, operator: crate::errors::Operator) {
        assert!(
            self.shape() == other.shape(),
            "{}",
            TensorError::OperatorError {
                operator,
                tensor1_shape: self.shape().to_vec(),
                tensor2_shape: other.shape().to_vec(),
            }
        );
    }
}
