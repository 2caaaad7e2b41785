use anyhow::{Context, Result};
use colored::*;
use serde::Deserialize;
use serde_json::{json, Value};
use std::io::{self, Write};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Driver {
    id: String,
    name: String,
    availability: String,
    assigned_route: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Route {
    id: String,
    name: String,
    start_location: String,
    end_location: String,
    time: String,
    assigned_driver_id: Option<String>,
}

struct Client {
    http: reqwest::Client,
    base_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    println!("{}", "🚚 Fleet Assignment Testing Tool".bright_blue().bold());
    println!("{}", "=====================================".bright_blue());
    println!();

    let base_url = std::env::var("FLEET_API_URL")
        .unwrap_or_else(|_| "http://localhost:3000".to_string());
    println!("{} {}", "🌐 Servidor:".bright_cyan(), base_url);

    let client = Client {
        http: reqwest::Client::new(),
        base_url,
    };

    loop {
        println!();
        println!("{}", "📋 MENÚ PRINCIPAL".bright_green().bold());
        println!("{}", "==================".bright_green());
        println!("1. 👤 Listar conductores");
        println!("2. 🛣️  Listar rutas");
        println!("3. ➕ Crear conductor");
        println!("4. ➕ Crear ruta");
        println!("5. ✅ Asignar conductor");
        println!("6. 🔓 Liberar ruta");
        println!("7. 🔁 Reasignar ruta");
        println!("8. 📊 Estadísticas");
        println!("9. 🚪 Salir");
        let choice = prompt("Selecciona una opción (1-9): ")?;

        let result = match choice.as_str() {
            "1" => list_drivers(&client).await,
            "2" => list_routes(&client).await,
            "3" => create_driver(&client).await,
            "4" => create_route(&client).await,
            "5" => change_assignment(&client, "assign").await,
            "6" => unassign(&client).await,
            "7" => change_assignment(&client, "reassign").await,
            "8" => show_stats(&client).await,
            "9" => {
                println!("{}", "👋 ¡Hasta luego!".bright_green());
                break;
            }
            _ => {
                println!("{}", "❌ Opción inválida. Intenta de nuevo.".bright_red());
                Ok(())
            }
        };

        if let Err(e) = result {
            println!("{} {:#}", "❌ Error:".bright_red(), e);
        }
    }

    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    print!("{}", label.bright_yellow());
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

impl Client {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn get(&self, path: &str) -> Result<Value> {
        let response = self.http.get(self.url(path)).send().await.context("GET falló")?;
        read_body(response).await
    }

    async fn post(&self, path: &str, body: Option<Value>) -> Result<Value> {
        let mut request = self.http.post(self.url(path));
        if let Some(body) = body {
            request = request.json(&body);
        }
        let response = request.send().await.context("POST falló")?;
        read_body(response).await
    }
}

async fn read_body(response: reqwest::Response) -> Result<Value> {
    let status = response.status();
    let body: Value = response.json().await.unwrap_or(Value::Null);
    if !status.is_success() {
        let message = body["message"].as_str().unwrap_or("sin detalle");
        anyhow::bail!("{} - {}", status, message);
    }
    Ok(body)
}

fn print_driver(driver: &Driver) {
    let badge = match driver.availability.as_str() {
        "Available" => driver.availability.bright_green(),
        "Assigned" => driver.availability.bright_yellow(),
        _ => driver.availability.bright_red(),
    };
    let route = driver
        .assigned_route
        .as_deref()
        .map(|r| format!(" (ruta {})", r))
        .unwrap_or_default();
    println!("  [{}] {} - {}{}", driver.id, driver.name.bold(), badge, route);
}

fn print_route(route: &Route) {
    let status = match &route.assigned_driver_id {
        Some(id) => format!("Assigned → conductor {}", id).bright_green(),
        None => "Unassigned".bright_red(),
    };
    println!(
        "  [{}] {} {} → {} @ {} - {}",
        route.id,
        route.name.bold(),
        route.start_location,
        route.end_location,
        route.time,
        status
    );
}

async fn list_drivers(client: &Client) -> Result<()> {
    let search = prompt("Buscar por nombre (vacío = todos): ")?;
    let availability = prompt("Disponibilidad (Available,Assigned,Unavailable; vacío = todas): ")?;
    let path = format!("/drivers?search={}&availability={}", search, availability);

    let drivers: Vec<Driver> = serde_json::from_value(client.get(&path).await?)?;
    println!("{}", format!("👤 {} conductores", drivers.len()).bright_cyan());
    drivers.iter().for_each(print_driver);
    Ok(())
}

async fn list_routes(client: &Client) -> Result<()> {
    let search = prompt("Buscar (nombre/origen/destino): ")?;
    let status = prompt("Estado (All/Assigned/Unassigned): ")?;
    let path = format!("/routes?search={}&status={}", search, status);

    let routes: Vec<Route> = serde_json::from_value(client.get(&path).await?)?;
    println!("{}", format!("🛣️  {} rutas", routes.len()).bright_cyan());
    routes.iter().for_each(print_route);
    Ok(())
}

async fn create_driver(client: &Client) -> Result<()> {
    let name = prompt("Nombre: ")?;
    let availability = prompt("Disponibilidad (Available/Unavailable): ")?;
    let availability = if availability.is_empty() { "Available".to_string() } else { availability };

    let body = client
        .post("/drivers", Some(json!({ "name": name, "availability": availability })))
        .await?;
    print_driver(&serde_json::from_value(body)?);
    Ok(())
}

async fn create_route(client: &Client) -> Result<()> {
    let presets = client.get("/routes/presets").await?;
    println!("{}", "📍 Rutas predefinidas:".bright_cyan());
    if let Some(presets) = presets.as_array() {
        for (i, p) in presets.iter().enumerate() {
            println!(
                "  {}. {} ({} → {})",
                i + 1,
                p["name"],
                p["startLocation"],
                p["endLocation"]
            );
        }
    }

    let choice = prompt("Número de preset (vacío = manual): ")?;
    let preset = choice
        .parse::<usize>()
        .ok()
        .and_then(|i| presets.get(i.checked_sub(1)?).cloned());

    let (name, start, end) = match preset {
        Some(p) => (
            p["name"].as_str().unwrap_or_default().to_string(),
            p["startLocation"].as_str().unwrap_or_default().to_string(),
            p["endLocation"].as_str().unwrap_or_default().to_string(),
        ),
        None => (prompt("Nombre: ")?, prompt("Origen: ")?, prompt("Destino: ")?),
    };
    let time = prompt("Hora de salida (HH:MM): ")?;

    let body = client
        .post(
            "/routes",
            Some(json!({ "name": name, "startLocation": start, "endLocation": end, "time": time })),
        )
        .await?;
    print_route(&serde_json::from_value(body)?);
    Ok(())
}

async fn change_assignment(client: &Client, action: &str) -> Result<()> {
    let route_id = prompt("ID de ruta: ")?;

    let available: Vec<Driver> = serde_json::from_value(client.get("/drivers/available").await?)?;
    if available.is_empty() {
        println!("{}", "⚠️ No hay conductores disponibles".bright_yellow());
        return Ok(());
    }
    println!("{}", "👤 Conductores disponibles:".bright_cyan());
    available.iter().for_each(print_driver);

    let driver_id = prompt("ID de conductor: ")?;
    let body = client
        .post(
            &format!("/routes/{}/{}", route_id, action),
            Some(json!({ "driverId": driver_id })),
        )
        .await?;

    print_route(&serde_json::from_value(body["route"].clone())?);
    print_driver(&serde_json::from_value(body["driver"].clone())?);
    if let Ok(previous) = serde_json::from_value::<Driver>(body["previousDriver"].clone()) {
        println!("{}", "🔓 Conductor anterior liberado:".bright_cyan());
        print_driver(&previous);
    }
    Ok(())
}

async fn unassign(client: &Client) -> Result<()> {
    let route_id = prompt("ID de ruta: ")?;
    let body = client
        .post(&format!("/routes/{}/unassign", route_id), None)
        .await?;

    print_route(&serde_json::from_value(body["route"].clone())?);
    match serde_json::from_value::<Driver>(body["driver"].clone()) {
        Ok(driver) => print_driver(&driver),
        Err(_) => println!("{}", "ℹ️ La ruta no tenía conductor".bright_blue()),
    }
    Ok(())
}

async fn show_stats(client: &Client) -> Result<()> {
    let stats = client.get("/stats").await?;
    println!("{}", "📊 ESTADÍSTICAS".bright_cyan().bold());
    println!("  Conductores disponibles: {}", stats["availableDrivers"]);
    println!("  Conductores asignados:   {}", stats["assignedDrivers"]);
    println!("  No disponibles:          {}", stats["unavailableDrivers"]);
    println!("  Rutas asignadas:         {}", stats["assignedRoutes"]);
    println!("  Rutas sin conductor:     {}", stats["unassignedRoutes"]);
    Ok(())
}
