/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : 节点图版本的全连接网络：显式的节点、连接与层
 *
 * 公开 API：
 * - `Network`: 网络本体（构建、预测、训练、梯度检查）
 * - `Layer` / `Node` / `Connection`: 网络的组成部分，只读访问
 */

mod connection;
mod display;
mod gradient_check;
mod layer;
mod network;
mod node;

pub use connection::{Connection, ConnectionId};
pub use layer::Layer;
pub use network::Network;
pub use node::{BIAS_OUTPUT, BiasNode, Node, NodeId, RealNode, TraitNode};
