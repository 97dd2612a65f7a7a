#[cfg(test)]
mod tests {
    use crate::Time;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_fresh_time_has_zero_delta() {
        let time = Time::new();
        assert_eq!(time.delta_seconds(), 0.0);
    }

    #[test]
    fn test_update_measures_elapsed_time() {
        let mut time = Time::new();
        thread::sleep(Duration::from_millis(10));
        time.update();
        assert!(time.delta_seconds() > 0.0);
    }
}
