use num_traits::{Num, Signed};


/// Manhattan distance
pub fn manhattan_distance<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Num + Copy + Signed,
    {
    (x1 - x2).abs() + (y1 - y2).abs()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan_distance() {
        assert_eq!(manhattan_distance(0, 0, 2, 2), 4);
        assert_eq!(manhattan_distance(5, 1, 1, 5), 8);
        assert_eq!(manhattan_distance(3, 3, 3, 3), 0);
    }

    #[test]
    fn test_manhattan_distance_negative_coordinates() {
        assert_eq!(manhattan_distance(-2, -3, 1, 1), 7);
        assert_eq!(manhattan_distance(-1, 0, -4, -2), 5);
    }
}
