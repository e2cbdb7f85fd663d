//! Static OpenAPI description served at `/api_schema.json`.

use serde_json::{json, Value};

/// Machine-readable description of the HTTP surface.
#[must_use]
pub fn document() -> Value {
    json!({
        "openapi": "3.1.0",
        "info": {
            "title": "Conclave API",
            "description": "API for coordinating a turn-based multiplayer board game.",
            "version": "1.0.0"
        },
        "paths": {
            "/check_server": {
                "get": {
                    "operationId": "checkServer",
                    "summary": "Check if the server is running",
                    "responses": { "200": { "description": "Server is running." } }
                }
            },
            "/game_state": {
                "get": {
                    "operationId": "getGameState",
                    "summary": "Retrieve the current game state",
                    "responses": { "200": { "description": "Returns the full game state document" } }
                }
            },
            "/reset_game": {
                "post": {
                    "operationId": "resetGame",
                    "summary": "Reset the game to its initial state",
                    "responses": { "200": { "description": "Game reset successfully." } }
                }
            },
            "/create_player": {
                "post": {
                    "operationId": "createPlayer",
                    "summary": "Create a new player",
                    "requestBody": {
                        "content": {
                            "application/json": {
                                "example": { "name": "JonSnow", "house": "Stark", "type": "human" }
                            }
                        }
                    },
                    "responses": {
                        "201": { "description": "Player created successfully" },
                        "400": { "description": "Missing fields or duplicate name" }
                    }
                }
            },
            "/start_game": {
                "post": {
                    "operationId": "startGame",
                    "summary": "Start the game once at least 3 players are registered",
                    "responses": {
                        "200": { "description": "Game has started." },
                        "400": { "description": "Not enough players" }
                    }
                }
            },
            "/execute_action": {
                "post": {
                    "operationId": "executeAction",
                    "summary": "Execute an action for the current turn",
                    "requestBody": {
                        "content": {
                            "application/json": {
                                "example": { "player": "JonSnow", "action": "attack" }
                            }
                        }
                    },
                    "responses": {
                        "200": { "description": "Action executed successfully" },
                        "400": { "description": "Unknown player, eliminated player, or out of turn" }
                    }
                }
            }
        }
    })
}
