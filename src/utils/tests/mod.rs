use crate::errors::NetworkError;
use crate::{assert_err, assert_panic};

#[test]
fn test_assert_panic_macro() {
    assert_panic!(panic!("test panic"));
    assert_panic!(panic!("custom test panic msg"), "custom test panic msg");
}

#[test]
fn test_assert_err_macro() {
    let result: Result<(), NetworkError> =
        Err(NetworkError::InvalidConfiguration("学习率须>0".to_string()));
    assert_err!(result);
    assert_err!(result, NetworkError::InvalidConfiguration("学习率须>0"));
    assert_err!(result, NetworkError::InvalidConfiguration(msg) if msg.contains("学习率"));

    let result: Result<(), NetworkError> = Err(NetworkError::DimensionMismatch {
        expected: 2,
        got: 3,
        message: "样本长度与输入层节点数不一致".to_string(),
    });
    assert_err!(result, NetworkError::DimensionMismatch(2, 3));
    assert_err!(result, NetworkError::DimensionMismatch { .. });
    assert_eq!(
        result.unwrap_err().to_string(),
        "样本长度与输入层节点数不一致：期望长度为2，实际为3"
    );
}

#[test]
fn test_assert_err_macro_on_ok() {
    let result: Result<u8, NetworkError> = Ok(1);
    assert_panic!({
        assert_err!(result);
    });
}
