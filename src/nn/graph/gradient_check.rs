/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : 节点图网络的梯度检查
 */

use super::connection::ConnectionId;
use super::network::Network;
use crate::errors::NetworkError;
use crate::nn::gradient_check::{
    GRADIENT_CHECK_EPSILON, GradientCheckRecord, ParameterId, network_error,
};

impl Network {
    /// 逐条连接比较反向传播得到的梯度与数值梯度，每条连接的结果都会写入日志。
    ///
    /// 每个权重扰动后都会复原，返回前再做一次前向传播，
    /// 使各节点的输出与未扰动的权重一致。本方法只返回记录，不判断是否通过
    pub fn gradient_check(
        &mut self,
        feature: &[f64],
        label: &[f64],
    ) -> Result<Vec<GradientCheckRecord>, NetworkError> {
        self.check_sample(feature)?;
        self.check_label(label)?;

        self.predict(feature)?;
        self.calc_delta(label)?;
        self.calc_gradient();

        let mut records = Vec::with_capacity(self.connections().len());
        for index in 0..self.connections().len() {
            let id = ConnectionId(index);
            let (upstream, downstream, weight, actual) = {
                let conn = &self.connections()[index];
                (
                    conn.upstream_node(),
                    conn.downstream_node(),
                    conn.weight(),
                    conn.gradient(),
                )
            };

            self.connection_mut(id).set_weight(weight + GRADIENT_CHECK_EPSILON);
            let error_plus = network_error(&self.predict(feature)?, label);
            self.connection_mut(id).set_weight(weight - GRADIENT_CHECK_EPSILON);
            let error_minus = network_error(&self.predict(feature)?, label);
            self.connection_mut(id).set_weight(weight);

            let record = GradientCheckRecord::new(
                ParameterId::Connection {
                    upstream,
                    downstream,
                },
                error_minus,
                error_plus,
                actual,
            );
            record.log();
            records.push(record);
        }
        self.predict(feature)?;
        Ok(records)
    }
}
