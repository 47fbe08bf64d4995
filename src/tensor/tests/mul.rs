use crate::assert_panic;
use crate::tensor::Tensor;

#[test]
fn test_scalar_mul() {
    let tensor = Tensor::new(&[1., -2., 3., 0.], &[2, 2]);
    let expected = Tensor::new(&[0.5, -1., 1.5, 0.], &[2, 2]);
    assert_eq!(0.5 * &tensor, expected);
    assert_eq!(0.5 * tensor, expected);
}

#[test]
fn test_element_wise_mul() {
    let a = Tensor::column(&[0.5, 0.25, 2.]);
    let b = Tensor::column(&[2., 4., -1.]);
    assert_eq!(&a * &b, Tensor::column(&[1., 1., -2.]));
    assert_eq!(a * b, Tensor::column(&[1., 1., -2.]));
}

#[test]
fn test_element_wise_mul_with_different_shapes() {
    let a = Tensor::column(&[1., 2.]);
    let b = Tensor::column(&[1., 2., 3.]);
    assert_panic!(
        &a * &b,
        "形状不一致，故无法逐元素相乘：第一个张量的形状为[2, 1]，第二个张量的形状为[3, 1]"
    );
}
