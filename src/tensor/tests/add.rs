/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : 张量的（逐元素）加法、自加法与减法
 */

use crate::assert_panic;
use crate::tensor::Tensor;

#[test]
fn test_add_with_or_without_ownership() {
    let tensor1 = Tensor::new(&[1., 2., 3., 4.], &[2, 2]);
    let tensor2 = Tensor::new(&[4., 5., 6., 7.], &[2, 2]);
    let expected = Tensor::new(&[5., 7., 9., 11.], &[2, 2]);

    // 不带引用的张量 + 不带引用的张量
    assert_eq!(tensor1.clone() + tensor2.clone(), expected);
    // 不带引用的张量 + 带引用的张量
    assert_eq!(tensor1.clone() + &tensor2, expected);
    // 带引用的张量 + 带引用的张量
    assert_eq!(&tensor1 + &tensor2, expected);
}

#[test]
fn test_add_assign() {
    let mut tensor = Tensor::column(&[1., 2.]);
    tensor += Tensor::column(&[0.5, -2.]);
    assert_eq!(tensor, Tensor::column(&[1.5, 0.]));
    tensor += &Tensor::column(&[1., 1.]);
    assert_eq!(tensor, Tensor::column(&[2.5, 1.]));
}

#[test]
fn test_sub() {
    let label = Tensor::column(&[1., 0.]);
    let output = Tensor::column(&[0.75, 0.25]);
    assert_eq!(&label - &output, Tensor::column(&[0.25, -0.25]));
    assert_eq!(label - output, Tensor::column(&[0.25, -0.25]));
}

#[test]
fn test_add_with_different_shapes() {
    let tensor1 = Tensor::column(&[1., 2.]);
    let tensor2 = Tensor::new(&[1., 2.], &[1, 2]);
    assert_panic!(
        tensor1.clone() + tensor2.clone(),
        "形状不一致，故无法相加：第一个张量的形状为[2, 1]，第二个张量的形状为[1, 2]"
    );
    assert_panic!(
        &tensor1 - &tensor2,
        "形状不一致，故无法相减：第一个张量的形状为[2, 1]，第二个张量的形状为[1, 2]"
    );
}
