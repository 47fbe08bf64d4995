use super::Tensor;
use std::ops::{Index, IndexMut};

// 引用式索引：`tensor[[row, col]]`
impl Index<[usize; 2]> for Tensor {
    type Output = f64;

    fn index(&self, index: [usize; 2]) -> &f64 {
        &self.data[index]
    }
}

impl IndexMut<[usize; 2]> for Tensor {
    fn index_mut(&mut self, index: [usize; 2]) -> &mut f64 {
        &mut self.data[index]
    }
}
