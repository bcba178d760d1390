/// 读取 rank[i]，越界位置视为 0（相当于文本末尾补哨兵）。
#[inline]
fn rank_at(rank: &[u32], i: usize) -> u32 {
    rank.get(i).copied().unwrap_or(0)
}

/// 计算只看首字符时每个后缀的 rank。
/// 出现过的字节按升序编号 1..sigma，0 留给哨兵；
/// 返回长度 n+1 的 rank 数组（rank[n] 即哨兵后缀，恒为 0）与字母表大小 sigma。
fn seed_rank(text: &[u8]) -> (Vec<u32>, u32) {
    let mut alpha = [0u32; 256];
    for &b in text {
        alpha[b as usize] = 1;
    }

    let mut sigma = 1u32;
    for slot in alpha.iter_mut() {
        if *slot == 1 {
            *slot = sigma;
            sigma += 1;
        }
    }

    let mut rank = vec![0u32; text.len() + 1];
    for (r, &b) in rank.iter_mut().zip(text.iter()) {
        *r = alpha[b as usize];
    }

    (rank, sigma)
}

/// 按 rank[sa[i]+k] 对 sa 做稳定基数排序，buf 为同长度的临时缓冲。
/// 32 位键拆成 4 个字节从低位到高位各做一轮计数排序；
/// 轮数为偶数，结果回落在调用方传入的 sa 切片里。
fn radix_sort_bucket(rank: &[u32], sa: &mut [u32], buf: &mut [u32], k: usize) {
    let (mut src, mut dst): (&mut [u32], &mut [u32]) = (sa, buf);

    for shift in (0..32).step_by(8) {
        let mut buckets = [0u32; 256];
        for &s in src.iter() {
            let b = ((rank_at(rank, s as usize + k) >> shift) & 0xff) as usize;
            buckets[b] += 1;
        }

        let mut acc = 0u32;
        for count in buckets.iter_mut() {
            let c = *count;
            *count = acc;
            acc += c;
        }

        for &s in src.iter() {
            let b = ((rank_at(rank, s as usize + k) >> shift) & 0xff) as usize;
            dst[buckets[b] as usize] = s;
            buckets[b] += 1;
        }

        std::mem::swap(&mut src, &mut dst);
    }
}

/// sa 已按 rank[sa[i]] 有序；在每个 rank 相同的桶内再按 rank[sa[i]+k] 排序，
/// 排完后 sa 整体按 (rank[sa[i]], rank[sa[i]+k]) 有序。
/// 长度为 1 的桶已就位，跳过，基数排序只花在未定序的后缀上。
fn sort_by_offset_rank(rank: &[u32], sa: &mut [u32], buf: &mut [u32], k: usize) {
    let n = sa.len();
    let mut start = 0;
    while start < n {
        let r = rank[sa[start] as usize];
        let mut end = start + 1;
        while end < n && rank[sa[end] as usize] == r {
            end += 1;
        }

        if end - start > 1 {
            radix_sort_bucket(rank, &mut sa[start..end], &mut buf[start..end], k);
        }

        start = end;
    }
}

/// sa 已按 (rank[sa[i]], rank[sa[i]+k]) 有序；为每个后缀计算新的稠密 rank，
/// 写入 out，返回新的字母表大小。
/// 两个 32 位 rank 打包进一个 u64 比较：高 32 位放当前 rank，低 32 位放偏移
/// rank。rank 不超过 n+1，各自必然放得下 32 位。
fn update_rank(sa: &[u32], rank: &[u32], out: &mut [u32], k: usize) -> u32 {
    let pair = |i: usize| -> u64 {
        let idx = sa[i] as usize;
        (u64::from(rank[idx]) << 32) | u64::from(rank_at(rank, idx + k))
    };

    let mut next = 0u32;
    out[sa[0] as usize] = next;

    let mut prev = pair(0);
    for i in 1..sa.len() {
        let cur = pair(i);
        if cur != prev {
            next += 1;
        }
        prev = cur;
        out[sa[i] as usize] = next;
    }

    next + 1
}

/// 构建后缀数组（前缀倍增，O(n log n)）。
/// 返回长度 n+1 的排列，包含位置 n 上的哨兵后缀（空后缀），
/// 因此 sa[0] 恒为 n。文本中不允许出现 0 字节（哨兵专用）。
pub fn build_sa(text: &[u8]) -> Vec<u32> {
    let n1 = text.len() + 1;
    let mut sa: Vec<u32> = (0..n1 as u32).collect();
    let (mut rank, mut sigma) = seed_rank(text);
    let mut scratch = vec![0u32; n1];

    // 首轮：全体按首字符排一次
    radix_sort_bucket(&rank, &mut sa, &mut scratch, 0);

    // 每轮把已区分的前缀长度翻倍，直到所有后缀两两可分（sigma == n+1）。
    // rank 与 scratch 轮换所有权：update_rank 写进 scratch，换过来当下一轮的
    // rank，旧 rank 退役成临时缓冲。
    let mut k = 1usize;
    while (sigma as usize) < n1 {
        sort_by_offset_rank(&rank, &mut sa, &mut scratch, k);
        sigma = update_rank(&sa, &rank, &mut scratch, k);
        std::mem::swap(&mut rank, &mut scratch);
        k *= 2;
    }

    sa
}
