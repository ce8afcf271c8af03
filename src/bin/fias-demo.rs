// Файл: bin/fias-demo.rs
// Пример использования клиента: токен, поиск, детали первого результата.

use clap::Parser;
use fias_public_api::{get_token, hint_object_id, FiasError, FiasPublicApi, DEFAULT_ORIGIN};
use serde_json::Value;

const EXTRA_SEARCHES: [&str; 3] = [
    "Санкт-Петербург, Невский проспект",
    "Тверская улица",
    "Арбат",
];

#[derive(Debug, Parser)]
#[command(name = "fias-demo", about = "Пример работы с публичным API ФИАС")]
struct Args {
    /// Строка поиска
    #[arg(default_value = "Москва, Красная площадь")]
    query: String,

    /// Значение параметра `url` при запросе токена
    #[arg(long, default_value = DEFAULT_ORIGIN)]
    origin: String,

    /// Не выполнять дополнительные примеры поиска
    #[arg(long)]
    skip_extra: bool,
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(&args).await {
        eprintln!("Ошибка: {}", e);
        eprintln!("Убедитесь, что есть доступ к интернету и сервис ФИАС доступен");
        std::process::exit(1);
    }
}

async fn run(args: &Args) -> Result<(), FiasError> {
    println!("1. Получаем токен...");
    let token = get_token(&args.origin).await?;
    let preview: String = token.chars().take(20).collect();
    println!("   Токен получен: {}...", preview);

    let api = FiasPublicApi::new(token);

    println!("2. Ищем адрес {:?}...", args.query);
    let hints = api.search(&args.query).await?;
    println!("   Найдено результатов: {}", hints.len());

    if let Some(first) = hints.first() {
        println!("3. Первый результат:");
        for key in ["id", "address", "type"] {
            println!("   {}: {}", key, first.get(key).map_or("N/A".into(), display_value));
        }

        if let Some(id) = hint_object_id(first) {
            println!("4. Детали объекта {}:", id);
            match api.details(id).await {
                Ok(details) => print_scalars(&details),
                Err(e) => println!("   Ошибка при получении деталей: {}", e),
            }
        }
    }

    if !args.skip_extra {
        println!("5. Дополнительные примеры поиска:");
        for query in EXTRA_SEARCHES {
            match api.search(query).await {
                Ok(found) => println!("   {:?}: {} результатов", query, found.len()),
                Err(e) => println!("   {:?}: ошибка - {}", query, e),
            }
        }
    }

    Ok(())
}

// Печатает только непустые скалярные поля верхнего уровня
fn print_scalars(details: &Value) {
    let Some(fields) = details.as_object() else {
        println!("   {}", details);
        return;
    };
    for (key, value) in fields {
        let shown = match value {
            Value::String(s) => !s.is_empty(),
            Value::Number(n) => n.as_f64() != Some(0.0),
            Value::Bool(b) => *b,
            _ => false,
        };
        if shown {
            println!("   {}: {}", key, display_value(value));
        }
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
