//! Q-table implementation for temporal difference learning

use crate::types::{Action, Position};

/// Dense Q-table over `(row, col, action)`
///
/// Every entry starts at zero. Values are stored row-major with the four
/// actions of a cell adjacent, in [`Action`] index order.
#[derive(Debug, Clone, PartialEq)]
pub struct QTable {
    rows: usize,
    cols: usize,
    q_values: Vec<f64>,
}

impl QTable {
    /// Create a `rows x cols x 4` table filled with zeros
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            q_values: vec![0.0; rows * cols * Action::COUNT],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn offset(&self, pos: Position) -> usize {
        assert!(
            pos.row < self.rows && pos.col < self.cols,
            "position {pos} outside {}x{} Q-table",
            self.rows,
            self.cols
        );
        (pos.row * self.cols + pos.col) * Action::COUNT
    }

    /// Get Q-value for a state-action pair
    pub fn get(&self, pos: Position, action: Action) -> f64 {
        self.q_values[self.offset(pos) + action.index()]
    }

    /// Set Q-value for a state-action pair
    pub fn set(&mut self, pos: Position, action: Action, value: f64) {
        let offset = self.offset(pos);
        self.q_values[offset + action.index()] = value;
    }

    /// All four action values of a state, in index order
    pub fn values(&self, pos: Position) -> [f64; Action::COUNT] {
        let offset = self.offset(pos);
        let mut values = [0.0; Action::COUNT];
        values.copy_from_slice(&self.q_values[offset..offset + Action::COUNT]);
        values
    }

    /// Greedy action and its value; ties go to the lowest action index
    pub fn best_action(&self, pos: Position) -> (Action, f64) {
        let values = self.values(pos);
        let mut best = (Action::Up, values[0]);
        for action in &Action::ALL[1..] {
            let value = values[action.index()];
            if value > best.1 {
                best = (*action, value);
            }
        }
        best
    }

    /// Maximum Q-value over all actions in a state
    pub fn max_value(&self, pos: Position) -> f64 {
        self.best_action(pos).1
    }

    /// Q-learning update: off-policy TD control
    ///
    /// Q(s,a) ← Q(s,a) + α[r + γ max_a' Q(s',a') - Q(s,a)]
    ///
    /// Returns the new value of Q(s,a).
    pub fn q_learning_update(
        &mut self,
        pos: Position,
        action: Action,
        reward: f64,
        next_pos: Position,
        learning_rate: f64,
        discount_factor: f64,
    ) -> f64 {
        let current_q = self.get(pos, action);
        let max_next_q = self.max_value(next_pos);
        let td_error = reward + discount_factor * max_next_q - current_q;
        let new_q = current_q + learning_rate * td_error;
        self.set(pos, action, new_q);
        new_q
    }

    /// Iterate over every `(position, action, value)` entry
    pub fn iter(&self) -> impl Iterator<Item = (Position, Action, f64)> + '_ {
        self.q_values.iter().enumerate().map(|(i, &value)| {
            let cell = i / Action::COUNT;
            (
                Position::new(cell / self.cols, cell % self.cols),
                Action::from_index(i % Action::COUNT),
                value,
            )
        })
    }
}
