use crate::errors::{Operator, TensorError};
use crate::tensor::Tensor;

impl Tensor {
    /// 实现矩阵乘法。
    /// 需要保证前一个张量的列数（col）等于后一个张量的行数（row），否则会触发panic。
    pub fn mat_mul(&self, other: &Tensor) -> Tensor {
        assert!(
            self.shape()[1] == other.shape()[0],
            "{}",
            TensorError::OperatorError {
                operator: Operator::MatMul,
                tensor1_shape: self.shape().to_vec(),
                tensor2_shape: other.shape().to_vec(),
            }
        );
        Tensor {
            data: self.data.dot(&other.data),
        }
    }

    /// 返回转置后的新张量
    pub fn transpose(&self) -> Tensor {
        Tensor {
            data: self.data.t().to_owned(),
        }
    }
}
