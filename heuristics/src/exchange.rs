use arrayvec::ArrayVec;
use cozy_chess::{BitBoard, Square};
use utils::{exchange_value, Snapshot};

// One side never has more than 16 pieces to line up on a square.
type Values = ArrayVec<u32, 16>;

/// Would moving the piece on `from` to `to` lose material?
///
/// A single-square static exchange approximation: the move is played on a scratch
/// snapshot, then attackers and defenders of `to` are traded off cheapest first.
/// Nothing is cached between destinations.
///
/// <https://www.chessprogramming.org/Static_Exchange_Evaluation>
pub fn is_unfavorable(snapshot: &Snapshot, from: Square, to: Square) -> bool {
    let (Some(piece), Some(color)) = (snapshot.piece_on(from), snapshot.color_on(from)) else {
        return false;
    };
    let mover = exchange_value(piece);

    let after = snapshot.with_move(from, to);
    let attackers = sorted_values(&after, after.attackers(!color, to));
    let defenders = sorted_values(&after, after.attackers(color, to));

    // Hanging
    if !attackers.is_empty() && defenders.is_empty() {
        return true;
    }
    if attackers.is_empty() {
        return false;
    }

    // A cheaper attacker wins material on the first capture
    if attackers[0] < mover {
        return true;
    }

    loses_exchange(mover, &attackers, &defenders)
}

/// Plays out alternating captures on one square. `attackers` and `defenders` hold
/// piece values sorted ascending; `mover` is the value of the piece first put at risk.
/// Returns true when the running balance ends up in the attackers' favor.
pub fn loses_exchange(mover: u32, attackers: &[u32], defenders: &[u32]) -> bool {
    let mut score = 0i32;
    let mut at_risk = mover as i32;

    let trades = attackers.len().min(defenders.len());
    for i in 0..trades {
        if attackers[i] < defenders[i] && score <= 0 {
            return false;
        }
        score += at_risk - attackers[i] as i32;
        at_risk = defenders[i] as i32;
    }

    // Attackers get the last, uncontested capture
    if attackers.len() > defenders.len() {
        score += at_risk - attackers[trades] as i32;
    }

    score > 0
}

fn sorted_values(snapshot: &Snapshot, squares: BitBoard) -> Values {
    let mut values: Values = squares
        .into_iter()
        .filter_map(|sq| snapshot.piece_on(sq))
        .map(exchange_value)
        .collect();
    values.sort_unstable();
    values
}
