use crate::domain::ports::Component;

/// Primality check by trial division up to the integer square root.
pub struct PrimeChecker;

impl Component for PrimeChecker {
    fn execute(&self, number: i64) -> bool {
        if number < 2 {
            return false;
        }
        if number == 2 {
            return true;
        }
        let mut divisor = 2;
        // divisor <= number / divisor avoids the overflow in divisor * divisor
        while divisor <= number / divisor {
            if number % divisor == 0 {
                return false;
            }
            divisor += 1;
        }
        true
    }
}
