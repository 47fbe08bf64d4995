use crate::nn::{Activation, Identity, Sigmoid, Step, TraitActivation};
use crate::tensor::Tensor;
use approx::assert_abs_diff_eq;

#[test]
fn test_sigmoid() {
    let sigmoid: Activation = Sigmoid.into();
    assert_abs_diff_eq!(sigmoid.forward(0.), 0.5);
    assert_abs_diff_eq!(sigmoid.forward(2.), 0.880_797_077_977_882_3, epsilon = 1e-12);
    // 导数以输出为参数
    assert_abs_diff_eq!(sigmoid.backward(0.5), 0.25);
    assert_abs_diff_eq!(sigmoid.backward(1.), 0.);
}

#[test]
fn test_step_and_identity() {
    let step: Activation = Step.into();
    assert_eq!(step.forward(0.3), 1.);
    assert_eq!(step.forward(0.), 0.);
    assert_eq!(step.forward(-2.), 0.);

    let identity: Activation = Identity.into();
    assert_eq!(identity.forward(-3.5), -3.5);
    assert_eq!(identity.backward(42.), 1.);
}

#[test]
fn test_activation_on_tensor() {
    let sigmoid = Activation::default();
    let output = sigmoid.forward_tensor(&Tensor::column(&[0., 0.]));
    assert_eq!(output, Tensor::column(&[0.5, 0.5]));
    assert_eq!(
        sigmoid.backward_tensor(&output),
        Tensor::column(&[0.25, 0.25])
    );
}

#[test]
fn test_activation_serde() {
    let json = serde_json::to_string(&Activation::from(Identity)).unwrap();
    assert_eq!(json, "\"identity\"");
    let activation: Activation = serde_json::from_str("\"step\"").unwrap();
    assert_eq!(activation, Step.into());
}
