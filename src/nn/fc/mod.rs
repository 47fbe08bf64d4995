/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : 矩阵版本的全连接网络：以矩阵运算代替逐节点计算
 */

mod full_connected_layer;
mod network;

pub use full_connected_layer::FullConnectedLayer;
pub use network::Network;
