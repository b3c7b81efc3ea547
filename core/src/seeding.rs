//! §4.2: map a rank-ordered team list into standard-bracket seed slots,
//! padding with BYE placeholders so the strongest seeds draw byes first.
//!
//! Grounded on the pivot-splitting algorithm in the original `tournament/utils.go`
//! (`seed`/`orderPivots`/`Pivot`): maintain a set of "pivots" (place, span)
//! and place seed pairs at each pivot in a fixed visitation order, alternating
//! orientation, then bisect every pivot and repeat until half the bracket is
//! filled.

#[derive(Debug, Clone, Copy)]
struct Pivot {
    place: isize,
    span: isize,
}

fn order_pivots(n: usize) -> Vec<usize> {
    let mut ordered = vec![0usize];
    for i in (1..n).rev() {
        ordered.push(i);
    }
    ordered
}

/// seed `ranked` (strongest first) into a `2^ceil(log2 n)`-slot bracket,
/// padding with `None` (BYE) so the top seeds meet a bye before meeting a
/// real opponent.
pub fn seed_bracket<T: Clone>(ranked: &[T]) -> Vec<Option<T>> {
    if ranked.is_empty() {
        return Vec::new();
    }
    let team_size = ranked.len().next_power_of_two();
    let mut padded: Vec<Option<T>> = ranked.iter().cloned().map(Some).collect();
    padded.resize(team_size, None);

    let mut ordered_teams: Vec<Option<T>> = vec![None; team_size];
    let mut count: usize = 0;
    let mut pivots = vec![Pivot {
        place: 0,
        span: team_size as isize,
    }];

    while count < team_size / 2 {
        let order_seq = order_pivots(pivots.len());

        let mut order: usize = 0;
        for rep in 0..2 {
            let indices: Vec<usize> = if rep == 0 {
                order_seq.clone()
            } else {
                order_seq.iter().rev().copied().collect()
            };
            for i in indices {
                let pivot = pivots[i];
                let mut p = pivot.place;
                let mut p2 = p + 1;
                if !order.is_multiple_of(2) {
                    p -= 1;
                    if p < 0 {
                        p += pivot.span;
                    }
                    p2 = p - 1;
                }
                ordered_teams[p as usize] = padded[count].clone();
                ordered_teams[p2 as usize] = padded[team_size - (count + 1)].clone();
                count += 1;
                order += 1;
            }
        }

        let mut new_pivots = Vec::new();
        for pivot in &pivots {
            let span = pivot.span / 2;
            let p = pivot.place - span;
            if p > 0 && p < team_size as isize {
                new_pivots.push(Pivot { place: p, span });
            }
            let p2 = pivot.place + span;
            if p2 > 0 && p2 < team_size as isize {
                new_pivots.push(Pivot { place: p2, span });
            }
        }
        pivots = new_pivots;
    }

    ordered_teams
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_of_two_seeds_canonical_interleave() {
        // 8 teams, rank 0 = strongest; pivot-bisection order of utils.go's seed()
        let teams: Vec<u32> = (0..8).collect();
        let seeded = seed_bracket(&teams);
        assert_eq!(seeded.len(), 8);
        assert_eq!(
            seeded,
            vec![
                Some(0),
                Some(7),
                Some(4),
                Some(3),
                Some(2),
                Some(5),
                Some(6),
                Some(1),
            ]
        );
    }

    #[test]
    fn padding_gives_top_seeds_first_byes() {
        // 6 teams pad to 8: A,B (ranks 0,1) draw the byes at the first pivot
        let teams = vec!["A", "B", "C", "D", "E", "F"];
        let seeded = seed_bracket(&teams);
        assert_eq!(seeded.len(), 8);
        assert_eq!(seeded[0], Some("A"));
        assert_eq!(seeded[1], None);
        assert_eq!(seeded[2], Some("E"));
        assert_eq!(seeded[3], Some("D"));
        assert_eq!(seeded[4], Some("C"));
        assert_eq!(seeded[5], Some("F"));
        assert_eq!(seeded[6], None);
        assert_eq!(seeded[7], Some("B"));
    }
}
