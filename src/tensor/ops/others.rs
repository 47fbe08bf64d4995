use crate::tensor::Tensor;

impl Tensor {
    /// 对每个元素应用`f`，返回一个同形状的新张量
    pub fn map<F: Fn(f64) -> f64>(&self, f: F) -> Tensor {
        Tensor {
            data: self.data.mapv(f),
        }
    }
}
