//! Оценка броска по правилам активного режима.
//!
//! Чистая функция: (грани, режим, сколько бросков участник уже сделал)
//! → дельта очков. Никакого знания об очереди ходов и раундах здесь нет.

use crate::domain::mode::GameMode;
use crate::domain::score::Score;

use super::tally::FaceTally;

/// Главная функция: дельта очков за один бросок.
///
/// `prior_rounds` — счётчик бросков участника до этого броска;
/// он нужен только блэкджеку (натуральные 21 на первом броске).
pub fn score_roll(mode: GameMode, faces: &[u32], prior_rounds: u32) -> Score {
    match mode {
        GameMode::Classic => Score(face_sum(faces)),
        GameMode::Poker => poker_score(faces),
        GameMode::Generala => generala_score(faces),
        GameMode::Blackjack => blackjack_score(faces, prior_rounds),
        GameMode::Truco => truco_score(faces),
    }
}

fn face_sum(faces: &[u32]) -> i64 {
    faces.iter().map(|&f| i64::from(f)).sum()
}

/// Покер на костях. Комбинации проверяются строго по убыванию ранга,
/// срабатывает первая подошедшая; без комбинации — сумма граней.
fn poker_score(faces: &[u32]) -> Score {
    let tally = FaceTally::from_faces(faces);
    let pairs = tally.pair_groups();

    if tally.has_at_least(5) {
        return Score(100);
    }
    if tally.has_at_least(4) {
        return Score(50);
    }
    // Фулл-хаус: тройка плюс минимум две группы-пары (тройка — одна из них).
    if tally.has_at_least(3) && pairs >= 2 {
        return Score(40);
    }
    if tally.has_at_least(3) {
        return Score(30);
    }
    if pairs >= 2 {
        return Score(20);
    }
    if pairs >= 1 {
        return Score(10);
    }
    Score(face_sum(faces))
}

/// Генерала: сервированная генерала (ровно пять одинаковых), потом эскалера.
fn generala_score(faces: &[u32]) -> Score {
    let tally = FaceTally::from_faces(faces);
    if tally.has_exactly(5) {
        return Score(1000);
    }
    if is_straight(faces) {
        return Score(500);
    }
    Score(face_sum(faces))
}

/// Эскалера: отсортированные грани образуют непрерывный ряд без повторов.
/// Один кубик рядом не считается.
fn is_straight(faces: &[u32]) -> bool {
    if faces.len() < 2 {
        return false;
    }
    let mut sorted = faces.to_vec();
    sorted.sort_unstable();
    sorted.windows(2).all(|w| w[1] == w[0] + 1)
}

/// Блэкджек: натуральные 21 на первом броске дают бонус,
/// перебор — фиксированный штраф вместо суммы.
fn blackjack_score(faces: &[u32], prior_rounds: u32) -> Score {
    let total = face_sum(faces);
    if prior_rounds == 0 && total == 21 {
        return Score(total + 50);
    }
    if total > 21 {
        return Score(-20);
    }
    Score(total)
}

/// Карточные значения труко для граней кубика.
/// Грани вне таблицы (d8/d10/d20) считаются по номиналу.
fn truco_value(face: u32) -> i64 {
    match face {
        1 => 11,
        2 => 10,
        3 => 9,
        4 => 8,
        5 => 7,
        6 => 6,
        other => i64::from(other),
    }
}

/// Труко: сумма по таблице значений плюс 10 очков за каждую
/// группу-пару в исходных гранях (энвидо).
fn truco_score(faces: &[u32]) -> Score {
    let total: i64 = faces.iter().map(|&f| truco_value(f)).sum();
    let pairs = i64::from(FaceTally::from_faces(faces).pair_groups());
    Score(total + pairs * 10)
}
