// NekoBrowser state managers
// Managers handle stateful operations: the bounded view history and its cursor.

pub mod history_navigator;
