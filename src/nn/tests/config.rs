use crate::assert_err;
use crate::errors::NetworkError;
use crate::nn::{Activation, NetworkConfig, fc, graph};

#[test]
fn test_config_defaults() {
    let config = NetworkConfig::from_json_str(r#"{"layers": [2, 5, 1]}"#).unwrap();
    assert_eq!(config, NetworkConfig::new(&[2, 5, 1]));
    assert_eq!(config.seed, None);
    assert_eq!(config.activation, Activation::default());
    assert_eq!(config.init_range, 0.1);
    assert_eq!(config.learning_rate, 0.1);
    assert_eq!(config.iterations, 1000);
}

#[test]
fn test_config_json_round_trip() {
    let config = NetworkConfig::new(&[3, 4, 2])
        .with_seed(7)
        .with_learning_rate(0.5)
        .with_iterations(20);
    let json = config.to_json_string().unwrap();
    assert!(json.contains("\"sigmoid\""));
    assert_eq!(NetworkConfig::from_json_str(&json).unwrap(), config);
}

#[test]
fn test_invalid_config() {
    assert_err!(
        NetworkConfig::from_json_str(r#"{"layers": [2]}"#),
        NetworkError::InvalidConfiguration("网络层数须≥2")
    );
    assert_err!(
        NetworkConfig::from_json_str(r#"{"layers": [2, 0, 1]}"#),
        NetworkError::InvalidConfiguration("第1层的节点数须>0")
    );
    assert_err!(
        NetworkConfig::from_json_str(r#"{"layers": [2, 1], "learning_rate": 0.0}"#),
        NetworkError::InvalidConfiguration("学习率须>0")
    );
    assert_err!(
        NetworkConfig::from_json_str(r#"{"layers": [2, 1], "iterations": 0}"#),
        NetworkError::InvalidConfiguration("迭代轮数须>0")
    );
    assert_err!(
        NetworkConfig::from_json_str(r#"{"layers": [2, 1], "init_range": -1.0}"#),
        NetworkError::InvalidConfiguration("权重初始化范围须>0")
    );
    assert_err!(
        NetworkConfig::from_json_str(r#"{"layers": "2, 1"}"#),
        NetworkError::ConfigParse(_)
    );
}

#[test]
fn test_networks_from_config() {
    let config = NetworkConfig::new(&[2, 3, 1]).with_seed(11);

    let mut graph_network_1 = graph::Network::from_config(&config).unwrap();
    let mut graph_network_2 = graph::Network::from_config(&config).unwrap();
    assert_eq!(graph_network_1.layer_sizes(), vec![2, 3, 1]);
    assert_eq!(
        graph_network_1.predict(&[0.3, 0.7]).unwrap(),
        graph_network_2.predict(&[0.3, 0.7]).unwrap()
    );

    let fc_network = fc::Network::from_config(&config).unwrap();
    assert_eq!(fc_network.layer_sizes(), vec![2, 3, 1]);
    assert_eq!(fc_network.layers().len(), 2);

    let invalid = NetworkConfig::new(&[2, 3, 1]).with_learning_rate(-1.);
    assert_err!(
        graph::Network::from_config(&invalid),
        NetworkError::InvalidConfiguration("学习率须>0")
    );
    assert_err!(
        fc::Network::from_config(&invalid),
        NetworkError::InvalidConfiguration("学习率须>0")
    );
}
