use anyhow::Result;

use rnn_matrix::{Matrix, MatrixJson};

fn main() -> Result<()> {
    env_logger::init();

    // Weights come straight from nested rows; the recurrence buffer starts
    // as an independent copy of them.
    let mut matrix = Matrix::from_array(&[vec![0.1, 0.2, 0.3], vec![0.4, 0.5, 0.6]], None);
    println!("built a {}x{} matrix", matrix.rows(), matrix.columns());
    println!("weights:    {:?}", matrix.weights());
    println!("recurrence: {:?}", matrix.recurrence());

    // A training step accumulates gradient-like state per element.
    for row in 0..matrix.rows() {
        for col in 0..matrix.columns() {
            let w = matrix.get_weight(row, col);
            matrix.set_recurrence(row, col, w * 0.5);
        }
    }
    println!("after accumulation: {:?}", matrix.recurrence());

    let text = serde_json::to_string_pretty(&matrix.to_json())?;
    println!("snapshot:\n{}", text);

    let parsed: MatrixJson = serde_json::from_str(&text)?;
    let restored = Matrix::try_from_json(&parsed)?;
    println!("restored weights:    {:?}", restored.weights());
    println!("restored recurrence: {:?}", restored.recurrence());

    Ok(())
}
