// Verification script to demonstrate schedule persistence
use class_schedule::models::schedule::SlotKey;
use class_schedule::models::vocabulary::Vocabulary;
use class_schedule::services::database::Database;
use class_schedule::services::schedule::ScheduleService;

const DB_PATH: &str = "schedule_demo.db";

fn main() {
    println!("=== Schedule Persistence Verification ===\n");

    let slot = SlotKey::new("شنبه", "۰۷:۳۰");

    println!("Step 1: First app launch - initializing database...");
    {
        let db = Database::new(DB_PATH).expect("Failed to create database");
        db.initialize_schema().expect("Failed to initialize schema");

        let service = ScheduleService::load(&db, Vocabulary::default());
        let schedule = service.schedule();
        println!("  Options stored: {}", schedule.option_count());
        println!("  Chosen slots:   {}", schedule.chosen_count());
    }

    println!("\nStep 2: User adds two courses at {} and picks the second...", slot);
    {
        let db = Database::new(DB_PATH).expect("Failed to open database");
        let mut service = ScheduleService::load(&db, Vocabulary::default());

        service
            .add_option(&slot, "Math", "201")
            .expect("Failed to add option");
        service
            .add_option(&slot, "Physics", "")
            .expect("Failed to add option");
        service.promote(&slot, 1).expect("Failed to promote option");
        println!("  Schedule saved!");
    }

    println!("\nStep 3: App restart - loading schedule...");
    {
        let db = Database::new(DB_PATH).expect("Failed to open database");
        let service = ScheduleService::load(&db, Vocabulary::default());
        let schedule = service.schedule();

        for option in schedule.options_at(&slot) {
            println!("    Option: {} ({})", option.title, option.display_code());
        }
        match schedule.chosen_at(&slot) {
            Some(item) => println!("    Chosen: {} ({}) ✓", item.title, item.display_code()),
            None => println!("    Chosen: none ✗"),
        }
    }

    std::fs::remove_file(DB_PATH).ok();
    println!("\n=== Verification complete ===");
}
