use crate::assert_err;
use crate::errors::NetworkError;
use crate::nn::fc::{FullConnectedLayer, Network};
use crate::nn::{Activation, Sigmoid, TraitActivation, graph};
use crate::tensor::Tensor;
use approx::assert_abs_diff_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_new_full_connected_layer() {
    let mut rng = StdRng::seed_from_u64(0);
    let layer = FullConnectedLayer::new(3, 2, Activation::default(), 0.1, &mut rng).unwrap();
    assert_eq!(layer.input_size(), 3);
    assert_eq!(layer.output_size(), 2);
    assert_eq!(layer.w().shape(), &[2, 3]);
    assert_eq!(layer.b(), &Tensor::zeros(2, 1));
    assert!(layer.w().to_vec().iter().all(|w| (-0.1..0.1).contains(w)));
}

#[test]
fn test_new_full_connected_layer_with_invalid_init_range() {
    let mut rng = StdRng::seed_from_u64(0);
    for init_range in [0., -0.1, f64::NAN] {
        assert_err!(
            FullConnectedLayer::new(3, 2, Activation::default(), init_range, &mut rng),
            NetworkError::InvalidConfiguration("权重初始化范围须>0")
        );
    }
}

#[test]
fn test_full_connected_layer_forward_backward_update() {
    let mut layer = FullConnectedLayer::with_parameters(
        Tensor::new(&[0.5, -0.5], &[1, 2]),
        Tensor::new(&[0.1], &[1, 1]),
        Activation::default(),
    );

    let output = layer.forward(&Tensor::column(&[1., 2.])).clone();
    assert_abs_diff_eq!(output[[0, 0]], Sigmoid.forward(-0.4), epsilon = 1e-12);

    let delta = layer.backward(&Tensor::new(&[0.2], &[1, 1])).clone();
    assert_eq!(layer.w_grad(), &Tensor::new(&[0.2, 0.4], &[1, 2]));
    assert_eq!(layer.b_grad(), &Tensor::new(&[0.2], &[1, 1]));
    // f'(input) ⊙ (Wᵀ·δ)，f'(1)=0，f'(2)=-2
    assert_abs_diff_eq!(delta[[0, 0]], 0., epsilon = 1e-12);
    assert_abs_diff_eq!(delta[[1, 0]], 0.2, epsilon = 1e-12);

    layer.update(0.5);
    assert_abs_diff_eq!(layer.w()[[0, 0]], 0.6, epsilon = 1e-12);
    assert_abs_diff_eq!(layer.w()[[0, 1]], -0.3, epsilon = 1e-12);
    assert_abs_diff_eq!(layer.b()[[0, 0]], 0.2, epsilon = 1e-12);
}

#[test]
fn test_full_connected_layer_set_parameters() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut layer = FullConnectedLayer::new(2, 1, Activation::default(), 0.1, &mut rng).unwrap();
    layer
        .set_parameters(Tensor::new(&[1., 2.], &[1, 2]), Tensor::zeros(1, 1))
        .unwrap();
    assert_eq!(layer.w(), &Tensor::new(&[1., 2.], &[1, 2]));
    assert_err!(
        layer.set_parameters(Tensor::zeros(2, 1), Tensor::zeros(1, 1)),
        NetworkError::InvalidOperation(_)
    );
}

#[test]
fn test_network_structure_and_errors() {
    let mut network = Network::new_with_seed(&[3, 4, 2], 9).unwrap();
    assert_eq!(network.layer_sizes(), vec![3, 4, 2]);
    assert_eq!(network.layers()[0].w().shape(), &[4, 3]);
    assert_eq!(network.layers()[1].w().shape(), &[2, 4]);

    let output = network.predict(&[0.1, 0.2, 0.3]).unwrap();
    assert_eq!(output.len(), 2);

    assert_err!(network.predict(&[0.1]), NetworkError::DimensionMismatch(3, 1));
    assert_err!(network.calc_gradient(&[1.]), NetworkError::DimensionMismatch(2, 1));
    assert_err!(
        network.train(&[vec![1., 0.]], &[vec![1., 0., 0.]], 0.1, 0),
        NetworkError::InvalidConfiguration("迭代轮数须>0")
    );
    assert_err!(
        Network::new(&[3]),
        NetworkError::InvalidConfiguration("网络层数须≥2")
    );
}

#[test]
fn test_total_error_with_invalid_data_set() {
    let mut network = Network::new_with_seed(&[2, 3, 1], 4).unwrap();
    assert_err!(
        network.total_error(&[vec![1.]], &[vec![1., 1.], vec![0., 0.]]),
        NetworkError::InvalidConfiguration("标签数量（1）与样本数量（2）不一致")
    );
    assert_err!(
        network.total_error(&[], &[]),
        NetworkError::InvalidConfiguration("训练集不能为空")
    );
    assert_err!(
        network.total_error(&[vec![1., 0.]], &[vec![1., 1.]]),
        NetworkError::DimensionMismatch(1, 2)
    );
}

#[test]
fn test_from_graph_network() {
    let mut graph_network = graph::Network::new_with_seed(&[2, 3, 2], 4).unwrap();
    let mut network = Network::from_graph_network(&graph_network).unwrap();

    // W[l][j][i] = 第l层第i号节点 -> 第l+1层第j号节点，b[l][j] = 第l层偏置节点 -> 第l+1层第j号节点
    assert_eq!(
        network.layers()[0].w()[[2, 1]],
        graph_network.weight(0, 1, 2).unwrap()
    );
    assert_eq!(
        network.layers()[1].b()[[1, 0]],
        graph_network.weight(1, 3, 1).unwrap()
    );

    let sample = [0.6, 0.3];
    let expected = graph_network.predict(&sample).unwrap();
    let actual = network.predict(&sample).unwrap();
    for (e, a) in expected.iter().zip(&actual) {
        assert_abs_diff_eq!(*e, *a, epsilon = 1e-12);
    }

    graph_network.remove_bias_connections().unwrap();
    assert_err!(
        Network::from_graph_network(&graph_network),
        NetworkError::InvalidOperation(_)
    );
}

#[test]
fn test_network_display() {
    let network = Network::from_graph_network(&graph::Network::new_with_seed(&[1, 1], 0).unwrap())
        .unwrap();
    let text = format!("{network}");
    assert!(text.starts_with("Network[1, 1]\nLayer 0:\nW:\n"));
    assert!(text.contains("b:\n"));
}
