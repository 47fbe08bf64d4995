/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : 节点图网络的文本输出：先逐层列出节点，再列出所有连接
 */

use super::network::Network;
use std::fmt;

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Network{:?}", self.layer_sizes())?;
        for layer in self.layers() {
            writeln!(f, "Layer {}:", layer.layer_index())?;
            writeln!(f, "{layer}")?;
        }
        writeln!(f, "Connections:")?;
        for conn in self.connections() {
            writeln!(f, "{conn}")?;
        }
        Ok(())
    }
}
