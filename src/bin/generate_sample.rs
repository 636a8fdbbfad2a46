use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

/// One lesson plan part, in the column order of the exported table.
/// `subject_id` is last so a short row can omit it entirely.
#[derive(Debug, Serialize)]
struct LessonPlanPart {
    id: u64,
    lesson_plan_id: u64,
    key: &'static str,
    value_text: String,
    key_stage_id: &'static str,
    subject_id: Option<String>,
}

/// How the `subject_id` field of a generated row is filled in.
enum Subject {
    Present(String),
    Empty,
    Absent,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

const PART_KEYS: [&str; 5] = [
    "learningOutcome",
    "keyLearningPoints",
    "misconceptions",
    "keywords",
    "starterQuiz",
];
const KEY_STAGES: [&str; 4] = ["ks1", "ks2", "ks3", "ks4"];
const SUBJECTS: [&str; 6] = ["maths", "english", "science", "history", "geography", "art"];

/// 15% of lesson plans get an empty subject, another 5% drop the field altogether.
fn roll_subject(rng: &mut SimpleRng) -> Subject {
    let roll = rng.next_f64();
    if roll < 0.15 {
        Subject::Empty
    } else if roll < 0.20 {
        Subject::Absent
    } else {
        Subject::Present(rng.pick(&SUBJECTS).to_string())
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let output_path = Path::new("lesson_plan_parts_2.csv");
    let file = File::create(output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;
    // Header is written by hand; flexible so short rows can sit next to full ones.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_writer(file);

    writer.write_record([
        "id",
        "lesson_plan_id",
        "key",
        "value_text",
        "key_stage_id",
        "subject_id",
    ])?;

    let mut counts = [0usize; 3];
    let mut row_id: u64 = 0;

    for lesson_plan_id in 1..=40u64 {
        let key_stage = *rng.pick(&KEY_STAGES);
        let subject = roll_subject(&mut rng);

        for key in PART_KEYS {
            row_id += 1;
            let value_text = format!("{key} for lesson plan {lesson_plan_id}");

            match &subject {
                Subject::Present(s) => {
                    counts[0] += 1;
                    writer.serialize(LessonPlanPart {
                        id: row_id,
                        lesson_plan_id,
                        key,
                        value_text,
                        key_stage_id: key_stage,
                        subject_id: Some(s.clone()),
                    })?;
                }
                Subject::Empty => {
                    counts[1] += 1;
                    writer.serialize(LessonPlanPart {
                        id: row_id,
                        lesson_plan_id,
                        key,
                        value_text,
                        key_stage_id: key_stage,
                        subject_id: None,
                    })?;
                }
                Subject::Absent => {
                    counts[2] += 1;
                    writer.write_record([
                        row_id.to_string(),
                        lesson_plan_id.to_string(),
                        key.to_string(),
                        value_text,
                        key_stage.to_string(),
                    ])?;
                }
            }
        }
    }

    writer.flush()?;

    println!(
        "Wrote {row_id} lesson plan parts to {} ({} with subject, {} empty, {} absent)",
        output_path.display(),
        counts[0],
        counts[1],
        counts[2]
    );
    Ok(())
}
