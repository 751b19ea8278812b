//! Градиенты-заглушки вместо съёмочного арта.
//!
//! Ассеты проектов живут вне репозитория; карточки и галереи рисуют
//! детерминированный градиент от стабильного сида, чтобы сетка выглядела
//! одинаково между перезагрузками.

/// Сид из id записи: длина строки, как в исходных карточках
pub fn seed_from_id(id: &str) -> usize {
    id.len()
}

/// Градиент карточки проекта по её позиции в выборке
pub fn placeholder_gradient(seed: usize) -> String {
    let h1 = (seed * 40) % 360;
    let h2 = (seed * 40 + 60) % 360;
    format!("linear-gradient(135deg, hsl({h1}, 30%, 15%), hsl({h2}, 40%, 25%))")
}

/// Градиент элемента галереи кейса
pub fn gallery_gradient(seed: usize, index: usize) -> String {
    let angle = 45 + index * 30;
    let h1 = (seed * 40 + index * 30) % 360;
    let h2 = (seed * 40 + index * 30 + 40) % 360;
    format!("linear-gradient({angle}deg, hsl({h1}, 25%, 20%), hsl({h2}, 35%, 30%))")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_is_deterministic() {
        assert_eq!(placeholder_gradient(3), placeholder_gradient(3));
        assert_eq!(gallery_gradient(3, 1), gallery_gradient(3, 1));
    }

    #[test]
    fn test_gradient_shape() {
        for seed in 0..50 {
            let css = placeholder_gradient(seed);
            assert!(css.starts_with("linear-gradient(135deg, hsl("));
            assert!(css.ends_with("25%))"));
        }
    }

    #[test]
    fn test_neighbour_cards_differ() {
        assert_ne!(placeholder_gradient(1), placeholder_gradient(2));
    }
}
