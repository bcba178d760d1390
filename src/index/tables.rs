use super::bwt::SENTINEL;

/// C 表：字母表中每个符号对应 BWT 里严格小于它的字符总数。
/// 建表后只读，可在多次反变换之间共享。
#[derive(Debug, Clone)]
pub struct CTab {
    /// cum[a] = BWT 中字符 < a 的累计数量
    cum: Vec<u32>,
}

impl CTab {
    /// 从 BWT 串建 C 表。asize 为字母表域大小（如 256）；
    /// BWT 中出现的字节必须都小于 asize。
    pub fn build(bwt: &[u8], asize: usize) -> Self {
        let mut counts = vec![0u32; asize];
        for &b in bwt {
            counts[b as usize] += 1;
        }

        // 前缀和取"不含自身"的累计值
        let mut acc = 0u32;
        for c in counts.iter_mut() {
            let n = *c;
            *c = acc;
            acc += n;
        }

        Self { cum: counts }
    }

    /// BWT 中严格小于 a 的字符个数。查询建表域之外的字节是调用方错误。
    #[inline]
    pub fn rank(&self, a: u8) -> u32 {
        self.cum[a as usize]
    }
}

/// O 表：符号 a 在 BWT 前缀 y[0..i] 中的出现次数。
/// 哨兵行不存，恒为零的首列也不存（i == 0 直接特判返回）。
/// 空间/时间都是 O(asize × n)；大文本应先把字母表压缩到实际出现的符号集。
#[derive(Debug, Clone)]
pub struct OTab {
    ncol: usize,
    table: Vec<u32>,
}

impl OTab {
    /// 从 BWT 串建 O 表。asize 为字母表域大小；行对应符号 1..asize。
    pub fn build(bwt: &[u8], asize: usize) -> Self {
        let nrow = asize - 1;
        let ncol = bwt.len();
        let mut otab = Self {
            ncol,
            table: vec![0u32; nrow * ncol],
        };
        if bwt.is_empty() {
            return otab;
        }

        // 第 1 列只有 bwt[0] 对应的符号计 1；哨兵行不存在，跳过
        if bwt[0] != SENTINEL {
            otab.set(bwt[0], 1, 1);
        }

        // 其余列抄上一列，轮到自己的符号加一
        for a in 1..asize {
            let ba = a as u8;
            for i in 2..=ncol {
                let mut val = otab.get(ba, i - 1);
                if bwt[i - 1] == ba {
                    val += 1;
                }
                otab.set(ba, i, val);
            }
        }

        otab
    }

    /// 行 a-1（跳过哨兵）、列 i-1（跳过首列）的展平下标。
    #[inline]
    fn offset(&self, a: u8, i: usize) -> usize {
        self.ncol * (a as usize - 1) + (i - 1)
    }

    #[inline]
    fn get(&self, a: u8, i: usize) -> u32 {
        self.table[self.offset(a, i)]
    }

    #[inline]
    fn set(&mut self, a: u8, i: usize, val: u32) {
        let off = self.offset(a, i);
        self.table[off] = val;
    }

    /// 符号 a 在 y[0..i] 中出现几次。a 必须不是哨兵且小于建表时的 asize。
    #[inline]
    pub fn rank(&self, a: u8, i: usize) -> u32 {
        if i == 0 {
            return 0;
        }
        self.get(a, i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::bwt::build_bwt;
    use quickcheck_macros::quickcheck;

    const ASIZE: usize = 256;

    #[test]
    fn ctab_counts_strictly_smaller() {
        // BWT("mississippi") = "ipssm\0pissii"
        let bwt = b"ipssm\0pissii";
        let ctab = CTab::build(bwt, ASIZE);
        assert_eq!(ctab.rank(SENTINEL), 0);
        assert_eq!(ctab.rank(b'i'), 1); // 只有哨兵更小
        assert_eq!(ctab.rank(b'm'), 5); // 哨兵 + 4 个 i
        assert_eq!(ctab.rank(b'p'), 6);
        assert_eq!(ctab.rank(b's'), 8);
        assert_eq!(ctab.rank(b'z'), 12);
    }

    #[test]
    fn ctab_is_monotone() {
        let bwt = build_bwt(b"mississippi");
        let ctab = CTab::build(&bwt, ASIZE);
        for a in 1..ASIZE {
            assert!(ctab.rank((a - 1) as u8) <= ctab.rank(a as u8));
        }
    }

    #[test]
    fn otab_matches_prefix_scan() {
        let bwt = build_bwt(b"mississippi");
        let otab = OTab::build(&bwt, ASIZE);
        for &a in &[b'i', b'm', b'p', b's', b'x'] {
            for i in 0..=bwt.len() {
                let expected = bwt[..i].iter().filter(|&&b| b == a).count();
                assert_eq!(otab.rank(a, i) as usize, expected, "a={} i={}", a, i);
            }
        }
    }

    #[test]
    fn otab_first_column_is_zero() {
        let bwt = build_bwt(b"mississippi");
        let otab = OTab::build(&bwt, ASIZE);
        for a in 1..ASIZE {
            assert_eq!(otab.rank(a as u8, 0), 0);
        }
    }

    #[test]
    fn otab_on_empty_text_bwt() {
        // 空文本的 BWT 只有哨兵一个字符
        let otab = OTab::build(&[SENTINEL], ASIZE);
        assert_eq!(otab.rank(b'a', 0), 0);
        assert_eq!(otab.rank(b'a', 1), 0);
    }

    #[quickcheck]
    fn quickcheck_table_totals(text: Vec<u8>) -> bool {
        let text: Vec<u8> = text.into_iter().filter(|&b| b != SENTINEL).collect();
        let bwt = build_bwt(&text);
        let ctab = CTab::build(&bwt, ASIZE);
        let otab = OTab::build(&bwt, ASIZE);

        (1..ASIZE).all(|a| {
            let ba = a as u8;
            let total = bwt.iter().filter(|&&b| b == ba).count();
            let smaller = bwt.iter().filter(|&&b| b < ba).count();
            otab.rank(ba, bwt.len()) as usize == total && ctab.rank(ba) as usize == smaller
        })
    }
}
