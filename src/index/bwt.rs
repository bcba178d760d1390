use super::sa;
use super::tables::{CTab, OTab};

/// 哨兵字节：字典序小于一切真实字符，不允许出现在输入文本里。
pub const SENTINEL: u8 = 0;

/// 反变换建表用的字母表域：完整字节域。
const ASIZE: usize = 256;

/// 根据后缀数组构建 BWT。
/// y[i] 是后缀 sa[i] 的前一个字符；sa[i] == 0 时该槽位放哨兵。
pub fn build_bwt_from_sa(text: &[u8], sa: &[u32]) -> Vec<u8> {
    let mut bwt = Vec::with_capacity(sa.len());
    for &p in sa {
        let i = p as usize;
        if i == 0 {
            bwt.push(SENTINEL);
        } else {
            bwt.push(text[i - 1]);
        }
    }
    bwt
}

/// 文本 -> BWT。输出长度 n+1（多出的一个是哨兵）。
pub fn build_bwt(text: &[u8]) -> Vec<u8> {
    let sa = sa::build_sa(text);
    build_bwt_from_sa(text, &sa)
}

/// BWT -> 原文本（LF 映射回走），输出长度 n。
/// 输入必须是 [`build_bwt`] 的产物；畸形输入得到错串而非报错。
pub fn invert_bwt(bwt: &[u8]) -> Vec<u8> {
    if bwt.is_empty() {
        return Vec::new();
    }

    let ctab = CTab::build(bwt, ASIZE);
    let otab = OTab::build(bwt, ASIZE);

    let n = bwt.len() - 1;
    let mut text = vec![0u8; n];

    // 行 0 是哨兵所在的旋转；从它出发倒着走，字符直接落到最终位置
    let mut i = 0usize;
    for j in (0..n).rev() {
        let a = bwt[i];
        text[j] = a;
        i = (ctab.rank(a) + otab.rank(a, i)) as usize;
    }

    text
}
