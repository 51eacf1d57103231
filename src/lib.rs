//! Streaming n-th highest value.
//!
//! Keeps the top n values of an unbounded stream in O(n) memory and answers
//! "what is the n-th highest value so far" in constant time.

pub mod prelude;

#[cfg(test)]
mod test {
    use crate::prelude::*;

    #[test]
    fn third_highest_latency() {
        let options = WindowOptions::from_toml("capacity = 3").unwrap();
        let mut window = RankedWindow::from_options(&options).unwrap();
        for latency in [12.5, 3.0, 40.25, 7.75] {
            assert_eq!(window.try_update(F64::defined(latency)), Ok(()));
        }
        assert_eq!(
            window.try_update(F64::defined(f64::NAN)),
            Err(UpdateError::NullValue)
        );
        assert_eq!(window.query(), Some(&F64(7.75)));
        assert_eq!(window.try_update(F64::defined(19.0)), Ok(()));
        assert_eq!(window.query(), Some(&F64(12.5)));
    }
}
