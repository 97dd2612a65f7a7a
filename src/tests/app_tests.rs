#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use crate::app::App;
    use crate::components::{Board, Cursor, Dock, GameState};
    use crate::game::{DOCK_CAPACITY, GRID_SIZE};
    use crate::scores::load_best_score;
    use crate::tests::test_utils::ENV_LOCK;

    // App::new reads the scores file, so every test here redirects it to a
    // temp path first
    fn scores_in_tempdir() -> tempfile::TempDir {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let scores_path = temp_dir.path().join("scores.toml");
        unsafe {
            std::env::set_var("BLOCKDOCK_SCORES", scores_path.to_str().unwrap());
        }
        temp_dir
    }

    #[test]
    fn test_new_app_has_a_fresh_session() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let _temp_dir = scores_in_tempdir();

        let app = App::new();
        assert!(!app.should_quit);

        let board = app.world.resource::<Board>();
        assert_eq!(board.size, GRID_SIZE);
        assert!(board.is_empty());

        assert_eq!(app.world.resource::<Dock>().len(), DOCK_CAPACITY);

        let state = app.world.resource::<GameState>();
        assert_eq!(state.score, 0);
        assert_eq!(state.best_score, 0);
        assert!(!state.game_over);

        let cursor = app.world.resource::<Cursor>();
        assert_eq!((cursor.row, cursor.col, cursor.selected), (0, 0, 0));
    }

    #[test]
    fn test_new_app_picks_up_the_saved_best() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let _temp_dir = scores_in_tempdir();

        crate::scores::save_best_score(800).expect("Failed to seed best score");

        let app = App::new();
        assert_eq!(app.world.resource::<GameState>().best_score, 800);
    }

    #[test]
    fn test_persist_best_writes_only_on_increase() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let _temp_dir = scores_in_tempdir();

        crate::scores::save_best_score(500).expect("Failed to seed best score");
        let mut app = App::new();

        // Not a new high: nothing written
        app.world.resource_mut::<GameState>().add_points(100);
        app.persist_best();
        assert_eq!(load_best_score().unwrap(), 500);

        // New high: written through
        app.world.resource_mut::<GameState>().add_points(900);
        app.persist_best();
        assert_eq!(load_best_score().unwrap(), 1000);
    }

    #[test]
    fn test_reset_keeps_the_best_score() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let _temp_dir = scores_in_tempdir();

        let mut app = App::new();
        app.world.resource_mut::<GameState>().add_points(300);
        app.world.resource_mut::<GameState>().game_over = true;

        app.reset();

        let state = app.world.resource::<GameState>();
        assert_eq!(state.score, 0);
        assert!(!state.game_over);
        assert_eq!(state.best_score, 300);
        assert!(app.world.resource::<Board>().is_empty());
        assert_eq!(app.world.resource::<Dock>().len(), DOCK_CAPACITY);
    }
}
